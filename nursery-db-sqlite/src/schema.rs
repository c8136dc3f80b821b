table! {
    users (id) {
        id -> Text,
        email -> Text,
        role -> SmallInt,
    }
}

table! {
    common_names (id) {
        id -> Text,
        name -> Text,
    }
}

table! {
    plants (id) {
        id -> Text,
        owner -> Nullable<Text>,
        scientific_name -> Text,
        common_name -> Text,
        water_frequency -> SmallInt,
        sun_exposure -> SmallInt,
        description -> Text,
        care_tips -> Text,
    }
}

table! {
    locations (id) {
        id -> Text,
        owner -> Text,
        name -> Text,
    }
}

table! {
    plant_instances (id) {
        id -> Text,
        plant_id -> Text,
        customer -> Nullable<Text>,
        location_id -> Text,
        nickname -> Text,
        purchased_on -> Text,
        due_watered_on -> Nullable<Text>,
        status -> SmallInt,
    }
}

joinable!(plant_instances -> plants (plant_id));
joinable!(plant_instances -> locations (location_id));

allow_tables_to_appear_in_same_query!(plants, locations, plant_instances);

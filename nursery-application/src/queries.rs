use time::Date;

use super::*;

// Read-only views. Each one grabs a shared connection from the pool,
// so they can run concurrently with each other.

pub fn dashboard(
    connections: &sqlite::Connections,
    session_visits: u64,
) -> Result<usecases::Dashboard> {
    Ok(usecases::dashboard(&connections.shared()?, session_visits)?)
}

pub fn authorize_user_by_id(
    connections: &sqlite::Connections,
    id: &Id,
    min_required_role: Role,
) -> Result<User> {
    Ok(usecases::authorize_user_by_id(
        &connections.shared()?,
        id,
        min_required_role,
    )?)
}

pub fn all_plants(connections: &sqlite::Connections, requester: &User) -> Result<Vec<Plant>> {
    Ok(usecases::all_plants(&connections.shared()?, requester)?)
}

pub fn plants_by_owner(connections: &sqlite::Connections, requester: &User) -> Result<Vec<Plant>> {
    Ok(usecases::plants_by_owner(&connections.shared()?, requester)?)
}

pub fn plant_details(
    connections: &sqlite::Connections,
    requester: &User,
    id: &Id,
) -> Result<usecases::PlantDetail> {
    Ok(usecases::get_plant(&connections.shared()?, requester, id)?)
}

pub fn all_locations(connections: &sqlite::Connections, requester: &User) -> Result<Vec<Location>> {
    Ok(usecases::all_locations(&connections.shared()?, requester)?)
}

pub fn locations_by_owner(
    connections: &sqlite::Connections,
    requester: &User,
) -> Result<Vec<Location>> {
    Ok(usecases::locations_by_owner(
        &connections.shared()?,
        requester,
    )?)
}

pub fn location_details(
    connections: &sqlite::Connections,
    requester: &User,
    id: &Id,
) -> Result<Location> {
    Ok(usecases::get_location(&connections.shared()?, requester, id)?)
}

pub fn all_instances(
    connections: &sqlite::Connections,
    requester: &User,
) -> Result<Vec<PlantInstance>> {
    Ok(usecases::all_instances(&connections.shared()?, requester)?)
}

pub fn instances_by_customer(
    connections: &sqlite::Connections,
    requester: &User,
) -> Result<Vec<PlantInstance>> {
    Ok(usecases::instances_by_customer(
        &connections.shared()?,
        requester,
    )?)
}

pub fn instances_due_for_watering(
    connections: &sqlite::Connections,
    requester: &User,
    today: Date,
) -> Result<Vec<PlantInstance>> {
    Ok(usecases::instances_due_for_watering(
        &connections.shared()?,
        requester,
        today,
    )?)
}

pub fn watered_instances(
    connections: &sqlite::Connections,
    requester: &User,
) -> Result<Vec<PlantInstance>> {
    Ok(usecases::watered_instances(
        &connections.shared()?,
        requester,
    )?)
}

pub fn instance_details(
    connections: &sqlite::Connections,
    requester: &User,
    id: &Id,
) -> Result<PlantInstance> {
    Ok(usecases::get_instance(&connections.shared()?, requester, id)?)
}

pub fn instance_form_choices(
    connections: &sqlite::Connections,
    requester: &User,
) -> Result<usecases::InstanceFormChoices> {
    Ok(usecases::instance_form_choices(
        &connections.shared()?,
        requester,
    )?)
}

pub fn all_common_names(connections: &sqlite::Connections) -> Result<Vec<CommonName>> {
    Ok(usecases::all_common_names(&connections.shared()?)?)
}

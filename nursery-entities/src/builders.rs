pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{instance_builder::*, plant_builder::*};

pub mod plant_builder {

    use super::*;
    use crate::{id::*, plant::*};

    #[derive(Debug)]
    pub struct PlantBuild {
        plant: Plant,
    }

    impl PlantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.plant.id = id.into();
            self
        }
        pub fn owner(mut self, owner: Option<&str>) -> Self {
            self.plant.owner = owner.map(Into::into);
            self
        }
        pub fn scientific_name(mut self, name: &str) -> Self {
            self.plant.scientific_name = name.into();
            self
        }
        pub fn common_name(mut self, name: &str) -> Self {
            self.plant.common_name = name.into();
            self
        }
        pub fn water_frequency(mut self, water: WaterFrequency) -> Self {
            self.plant.water_frequency = water;
            self
        }
        pub fn sun_exposure(mut self, sun: SunExposure) -> Self {
            self.plant.sun_exposure = sun;
            self
        }
        pub fn finish(self) -> Plant {
            self.plant
        }
    }

    impl Builder for Plant {
        type Build = PlantBuild;
        fn build() -> Self::Build {
            PlantBuild {
                plant: Plant {
                    id: Id::new(),
                    owner: None,
                    scientific_name: Default::default(),
                    common_name: Default::default(),
                    water_frequency: WaterFrequency::Regular,
                    sun_exposure: SunExposure::PartShade,
                    description: Default::default(),
                    care_tips: Default::default(),
                },
            }
        }
    }
}

pub mod instance_builder {

    use super::*;
    use crate::{id::*, instance::*};
    use time::{macros::date, Date};

    #[derive(Debug)]
    pub struct PlantInstanceBuild {
        instance: PlantInstance,
    }

    impl PlantInstanceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.instance.id = id.into();
            self
        }
        pub fn plant_id(mut self, id: &str) -> Self {
            self.instance.plant_id = id.into();
            self
        }
        pub fn customer(mut self, customer: Option<&str>) -> Self {
            self.instance.customer = customer.map(Into::into);
            self
        }
        pub fn location_id(mut self, id: &str) -> Self {
            self.instance.location_id = id.into();
            self
        }
        pub fn nickname(mut self, nickname: &str) -> Self {
            self.instance.nickname = nickname.into();
            self
        }
        pub fn purchased_on(mut self, purchased: Date) -> Self {
            self.instance.purchased_on = purchased;
            self
        }
        pub fn due_watered_on(mut self, due: Option<Date>) -> Self {
            self.instance.due_watered_on = due;
            self
        }
        pub fn status(mut self, status: WateringStatus) -> Self {
            self.instance.status = status;
            self
        }
        pub fn finish(self) -> PlantInstance {
            self.instance
        }
    }

    impl Builder for PlantInstance {
        type Build = PlantInstanceBuild;
        fn build() -> Self::Build {
            PlantInstanceBuild {
                instance: PlantInstance {
                    id: Id::new(),
                    plant_id: Id::new(),
                    customer: None,
                    location_id: Id::new(),
                    nickname: Default::default(),
                    purchased_on: date!(2024 - 01 - 01),
                    due_watered_on: None,
                    status: WateringStatus::default(),
                },
            }
        }
    }
}

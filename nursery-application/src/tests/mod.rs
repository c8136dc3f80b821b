pub mod prelude {
    pub use nursery_core::{
        authorization::RolePermissionPolicy,
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use time::macros::date;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub permissions: RolePermissionPolicy,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            nursery_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self {
                db_connections,
                permissions: RolePermissionPolicy,
            }
        }

        pub fn create_user(&self, email: &str, role: Role) -> User {
            let user = User {
                id: Id::new(),
                email: email.into(),
                role,
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user
        }

        pub fn create_plant(&self, owner: &User, scientific_name: &str) -> Plant {
            flows::create_plant(
                &self.db_connections,
                &self.permissions,
                owner,
                usecases::NewPlant {
                    scientific_name: scientific_name.into(),
                    common_name: "Weeping fig".into(),
                    water_frequency: WaterFrequency::Regular,
                    sun_exposure: SunExposure::PartShade,
                    description: Default::default(),
                    care_tips: Default::default(),
                },
            )
            .unwrap()
        }

        pub fn create_location(&self, owner: &User, name: &str) -> Location {
            flows::create_location(
                &self.db_connections,
                &self.permissions,
                owner,
                usecases::NewLocation { name: name.into() },
            )
            .unwrap()
        }

        pub fn create_instance(&self, customer: &User, plant: &Plant, location: &Location, nickname: &str) -> PlantInstance {
            flows::create_instance(
                &self.db_connections,
                &self.permissions,
                customer,
                date!(2024 - 06 - 01),
                usecases::NewPlantInstance {
                    plant_id: plant.id.clone(),
                    location_id: location.id.clone(),
                    nickname: nickname.into(),
                    customer: None,
                },
            )
            .unwrap()
        }

        pub fn try_get_instance(&self, id: &Id) -> Option<PlantInstance> {
            match self.db_connections.shared().unwrap().get_instance(id) {
                Ok(instance) => Some(instance),
                Err(RepoError::NotFound) => None,
                Err(err) => panic!("Failed to load instance: {err}"),
            }
        }
    }
}

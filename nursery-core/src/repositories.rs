// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;
use time::Date;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The object is still referenced by dependent records")]
    StillReferenced,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user(&self, id: &Id) -> Result<Option<User>>;
}

pub trait PlantRepo {
    fn create_plant(&self, plant: &Plant) -> Result<()>;
    fn update_plant(&self, plant: &Plant) -> Result<()>;

    // Deleting a plant that is still referenced by an instance
    // fails with `StillReferenced`.
    fn delete_plant(&self, id: &Id) -> Result<()>;

    fn get_plant(&self, id: &Id) -> Result<Plant>;

    // Ordered by scientific name
    fn all_plants(&self) -> Result<Vec<Plant>>;
    fn plants_by_owner(&self, owner: &Id) -> Result<Vec<Plant>>;

    fn try_get_plant_by_owner_and_scientific_name(
        &self,
        owner: Option<&Id>,
        scientific_name: &str,
    ) -> Result<Option<Plant>>;

    fn count_plants(&self) -> Result<usize>;
    fn count_plants_with_common_name(&self, name: &str) -> Result<usize>;
}

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<()>;
    fn update_location(&self, location: &Location) -> Result<()>;

    // Deleting a location that is still referenced by an instance
    // fails with `StillReferenced`.
    fn delete_location(&self, id: &Id) -> Result<()>;

    fn get_location(&self, id: &Id) -> Result<Location>;

    // Ordered by name
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn locations_by_owner(&self, owner: &Id) -> Result<Vec<Location>>;

    // Case-insensitive comparison
    fn try_get_location_by_name(&self, name: &str) -> Result<Option<Location>>;

    fn count_locations(&self) -> Result<usize>;
}

pub trait CommonNameRepo {
    fn create_common_name(&self, common_name: &CommonName) -> Result<()>;
    fn delete_common_name(&self, id: &Id) -> Result<()>;

    fn get_common_name(&self, id: &Id) -> Result<CommonName>;

    // Ordered by name
    fn all_common_names(&self) -> Result<Vec<CommonName>>;

    // Case-insensitive comparison
    fn try_get_common_name_by_name(&self, name: &str) -> Result<Option<CommonName>>;
}

pub trait PlantInstanceRepo {
    fn create_instance(&self, instance: &PlantInstance) -> Result<()>;
    fn update_instance(&self, instance: &PlantInstance) -> Result<()>;
    fn delete_instance(&self, id: &Id) -> Result<()>;

    fn get_instance(&self, id: &Id) -> Result<PlantInstance>;

    // Ordered by (customer, nickname)
    fn all_instances(&self) -> Result<Vec<PlantInstance>>;

    // Ordered by due-watered date
    fn instances_by_customer(&self, customer: &Id) -> Result<Vec<PlantInstance>>;
    fn instances_due_by(&self, customer: &Id, due_by: Date) -> Result<Vec<PlantInstance>>;
    fn instances_by_customer_with_status(
        &self,
        customer: &Id,
        status: WateringStatus,
    ) -> Result<Vec<PlantInstance>>;

    fn instances_of_plant(&self, plant_id: &Id) -> Result<Vec<PlantInstance>>;

    // Nicknames are unique per customer, not globally
    fn try_get_instance_by_customer_and_nickname(
        &self,
        customer: Option<&Id>,
        nickname: &str,
    ) -> Result<Option<PlantInstance>>;

    fn count_instances(&self) -> Result<usize>;
    fn count_instances_with_status(&self, status: WateringStatus) -> Result<usize>;
    fn count_instances_of_plant(&self, plant_id: &Id) -> Result<usize>;
    fn count_instances_of_location(&self, location_id: &Id) -> Result<usize>;
}

use crate::repositories::*;

/// Combined database access for use cases that touch more than one
/// repository, e.g. referential checks before a delete.
pub trait Db: UserRepo + PlantRepo + LocationRepo + CommonNameRepo + PlantInstanceRepo {}

impl<T> Db for T where
    T: UserRepo + PlantRepo + LocationRepo + CommonNameRepo + PlantInstanceRepo
{
}

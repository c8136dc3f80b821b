mod common_names;
mod create_instance;
mod create_location;
mod create_plant;
mod delete_instance;
mod delete_location;
mod delete_plant;
mod queries;
mod renew_due_watered;
mod update_instance;
mod update_location;
mod update_plant;

pub mod prelude {
    pub use super::{
        common_names::*, create_instance::*, create_location::*, create_plant::*,
        delete_instance::*, delete_location::*, delete_plant::*, queries::*,
        renew_due_watered::*, update_instance::*, update_location::*, update_plant::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use nursery_core::{entities::*, usecases, PermissionGateway};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use nursery_db_sqlite::Connections;
}

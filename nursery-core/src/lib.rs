pub mod authorization;
pub mod db;
pub mod repositories;
pub mod usecases;
pub mod watering;

pub mod entities {
    pub use nursery_entities::{
        common_name::*, id::*, instance::*, location::*, permission::*, plant::*, user::*,
    };
}

use entities::{Permission, User};

/// External permission layer.
///
/// Evaluated before any data is touched. A denial is surfaced as an
/// access-denied response by the outer collaborator.
pub trait PermissionGateway {
    fn has_permission(&self, user: &User, permission: Permission) -> bool;
}

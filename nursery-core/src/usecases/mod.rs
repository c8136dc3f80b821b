mod authorize;
mod common_names;
mod create_instance;
mod create_location;
mod create_plant;
mod dashboard;
mod delete_instance;
mod delete_location;
mod delete_plant;
mod error;
mod get_instance;
mod get_location;
mod get_plant;
mod list_instances;
mod list_locations;
mod list_plants;
mod renew_due_watered;
mod update_instance;
mod update_location;
mod update_plant;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, common_names::*, create_instance::*, create_location::*, create_plant::*,
    dashboard::*, delete_instance::*, delete_location::*, delete_plant::*, error::Error,
    get_instance::*, get_location::*, get_plant::*, list_instances::*, list_locations::*,
    list_plants::*, renew_due_watered::*, update_instance::*, update_location::*, update_plant::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization::{authorize_role, check_access, check_visibility, AccessDecision},
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        PermissionGateway,
    };
}
use self::prelude::*;

fn require_permission(
    permissions: &dyn PermissionGateway,
    requester: &User,
    permission: Permission,
) -> Result<()> {
    if !permissions.has_permission(requester, permission) {
        return Err(Error::PermissionDenied(permission));
    }
    Ok(())
}

fn require_access(requester: &User, owner: Option<&Id>) -> Result<()> {
    match check_access(requester, owner) {
        AccessDecision::Allowed => Ok(()),
        AccessDecision::Denied(reason) => {
            log::info!(
                "Denied access for user {}: {:?}",
                requester.id,
                reason
            );
            Err(Error::Forbidden)
        }
    }
}

fn require_visibility(requester: &User, owner: Option<&Id>) -> Result<()> {
    match check_visibility(requester, owner) {
        AccessDecision::Allowed => Ok(()),
        AccessDecision::Denied(_) => Err(Error::Forbidden),
    }
}

use crate::{
    entities::{Permission, Role, User},
    PermissionGateway,
};

/// Role-based default policy for deployments without an external
/// permission layer.
///
/// Authenticated customers hold every record permission; the
/// per-record ownership check still applies on top. Guests hold none.
#[derive(Debug, Default, Clone, Copy)]
pub struct RolePermissionPolicy;

impl PermissionGateway for RolePermissionPolicy {
    fn has_permission(&self, user: &User, _permission: Permission) -> bool {
        user.role >= Role::Customer
    }
}

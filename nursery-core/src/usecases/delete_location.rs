use super::prelude::*;

/// Deletion is blocked while any instance still references the
/// location. The store-level restrict constraint is the backstop for
/// races.
pub fn delete_location<R: LocationRepo + PlantInstanceRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
) -> Result<()> {
    super::require_permission(permissions, requester, Permission::DeleteLocation)?;
    let location = repo.get_location(id)?;
    super::require_access(requester, Some(&location.owner))?;
    if repo.count_instances_of_location(id)? > 0 {
        return Err(Error::StillReferenced);
    }
    repo.delete_location(id)?;
    Ok(())
}

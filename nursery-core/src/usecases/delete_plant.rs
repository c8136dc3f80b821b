use super::prelude::*;

/// Deletion is blocked while any instance still references the plant.
/// The store-level restrict constraint is the backstop for races.
pub fn delete_plant<R: PlantRepo + PlantInstanceRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
) -> Result<()> {
    super::require_permission(permissions, requester, Permission::DeletePlant)?;
    let plant = repo.get_plant(id)?;
    super::require_access(requester, plant.owner.as_ref())?;
    if repo.count_instances_of_plant(id)? > 0 {
        return Err(Error::StillReferenced);
    }
    repo.delete_plant(id)?;
    Ok(())
}

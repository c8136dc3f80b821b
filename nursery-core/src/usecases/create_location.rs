use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
}

pub fn create_location<R: LocationRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    new_location: NewLocation,
) -> Result<Location> {
    super::require_permission(permissions, requester, Permission::AddLocation)?;
    let NewLocation { name } = new_location;
    if repo.try_get_location_by_name(&name)?.is_some() {
        return Err(Error::DuplicateLocationName);
    }
    let location = Location {
        id: Id::new(),
        owner: requester.id.clone(),
        name,
    };
    repo.create_location(&location)?;
    Ok(location)
}

use super::prelude::*;

/// Staff view over all locations, ordered by name.
pub fn all_locations<R: LocationRepo>(repo: &R, requester: &User) -> Result<Vec<Location>> {
    if !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    Ok(repo.all_locations()?)
}

/// Locations owned by the requester, ordered by name.
pub fn locations_by_owner<R: LocationRepo>(repo: &R, requester: &User) -> Result<Vec<Location>> {
    authorize_role(requester, Role::Customer)?;
    Ok(repo.locations_by_owner(&requester.id)?)
}

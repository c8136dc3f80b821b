use super::prelude::*;

pub fn get_location<R: LocationRepo>(repo: &R, requester: &User, id: &Id) -> Result<Location> {
    let location = repo.get_location(id)?;
    super::require_visibility(requester, Some(&location.owner))?;
    Ok(location)
}

use super::prelude::*;

pub fn get_instance<R: PlantInstanceRepo>(
    repo: &R,
    requester: &User,
    id: &Id,
) -> Result<PlantInstance> {
    let instance = repo.get_instance(id)?;
    super::require_access(requester, instance.customer.as_ref())?;
    Ok(instance)
}

use time::Date;

use super::prelude::*;

/// Staff view over the whole inventory, ordered by (customer, nickname).
pub fn all_instances<R: PlantInstanceRepo>(
    repo: &R,
    requester: &User,
) -> Result<Vec<PlantInstance>> {
    if !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    Ok(repo.all_instances()?)
}

/// The requester's inventory, ordered by due-watered date.
pub fn instances_by_customer<R: PlantInstanceRepo>(
    repo: &R,
    requester: &User,
) -> Result<Vec<PlantInstance>> {
    authorize_role(requester, Role::Customer)?;
    Ok(repo.instances_by_customer(&requester.id)?)
}

/// The requester's records that are due for watering today or earlier.
pub fn instances_due_for_watering<R: PlantInstanceRepo>(
    repo: &R,
    requester: &User,
    today: Date,
) -> Result<Vec<PlantInstance>> {
    authorize_role(requester, Role::Customer)?;
    Ok(repo.instances_due_by(&requester.id, today)?)
}

/// The requester's records that are currently marked watered.
pub fn watered_instances<R: PlantInstanceRepo>(
    repo: &R,
    requester: &User,
) -> Result<Vec<PlantInstance>> {
    authorize_role(requester, Role::Customer)?;
    Ok(repo.instances_by_customer_with_status(&requester.id, WateringStatus::Watered)?)
}

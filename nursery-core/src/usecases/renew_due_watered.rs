use time::Date;

use super::prelude::*;

/// Sets a new due-watered date and marks the instance watered,
/// regardless of its prior status.
///
/// The renewal date must lie strictly after the submission date,
/// otherwise the instance would be watered yet overdue at once. Any
/// authenticated user may confirm a renewal; only the existence of
/// the instance is checked.
pub fn renew_due_watered<R: PlantInstanceRepo>(
    repo: &R,
    requester: &User,
    id: &Id,
    today: Date,
    renewal_date: Date,
) -> Result<PlantInstance> {
    authorize_role(requester, Role::Customer)?;
    if renewal_date <= today {
        return Err(Error::RenewalDateNotInFuture);
    }
    let mut instance = repo.get_instance(id)?;
    instance.due_watered_on = Some(renewal_date);
    instance.status = WateringStatus::Watered;
    repo.update_instance(&instance)?;
    Ok(instance)
}

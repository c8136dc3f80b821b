use time::Date;

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct PlantInstanceUpdate {
    pub plant_id: Id,
    pub location_id: Id,
    pub nickname: String,
    pub purchased_on: Date,
    pub due_watered_on: Option<Date>,
    pub status: WateringStatus,
    /// Customer reassignment, exposed by the staff form only.
    pub customer: Option<Option<Id>>,
}

pub fn update_instance<R: Db>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
    update: PlantInstanceUpdate,
) -> Result<PlantInstance> {
    super::require_permission(permissions, requester, Permission::ChangePlantInstance)?;
    let mut instance = repo.get_instance(id)?;
    super::require_access(requester, instance.customer.as_ref())?;
    if update.customer.is_some() && !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    let PlantInstanceUpdate {
        plant_id,
        location_id,
        nickname,
        purchased_on,
        due_watered_on,
        status,
        customer,
    } = update;
    let customer = customer.unwrap_or_else(|| instance.customer.clone());
    let plant = repo.get_plant(&plant_id)?;
    let location = repo.get_location(&location_id)?;
    if !requester.is_staff() {
        // same restriction as on the create form: only rows owned by
        // the requester are selectable
        if plant.owner.as_ref() != Some(&requester.id) || location.owner != requester.id {
            return Err(Error::Forbidden);
        }
    }
    if nickname != instance.nickname || customer != instance.customer {
        if let Some(existing) =
            repo.try_get_instance_by_customer_and_nickname(customer.as_ref(), &nickname)?
        {
            if existing.id != instance.id {
                return Err(Error::DuplicateNickname);
            }
        }
    }
    instance.plant_id = plant_id;
    instance.location_id = location_id;
    instance.nickname = nickname;
    instance.purchased_on = purchased_on;
    instance.due_watered_on = due_watered_on;
    instance.status = status;
    instance.customer = customer;
    repo.update_instance(&instance)?;
    Ok(instance)
}

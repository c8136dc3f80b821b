use time::Date;

use super::prelude::*;
use crate::watering;

#[derive(Debug, Clone)]
pub struct NewPlantInstance {
    pub plant_id: Id,
    pub location_id: Id,
    pub nickname: String,
    /// Customer assignment, exposed by the staff form only. The
    /// customer of a record is never user-suppliable: non-staff
    /// requesters always become the customer themselves.
    pub customer: Option<Id>,
}

/// Registers a newly acquired specimen.
///
/// Defaults: purchased today, due for watering in two weeks, status
/// "watered".
pub fn create_instance<R: Db>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    today: Date,
    new_instance: NewPlantInstance,
) -> Result<PlantInstance> {
    super::require_permission(permissions, requester, Permission::AddPlantInstance)?;
    let NewPlantInstance {
        plant_id,
        location_id,
        nickname,
        customer,
    } = new_instance;
    if customer.is_some() && !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    let customer = customer.unwrap_or_else(|| requester.id.clone());
    let plant = repo.get_plant(&plant_id)?;
    let location = repo.get_location(&location_id)?;
    if !requester.is_staff() {
        // The selectable plant/location sets are restricted to rows
        // owned by the requester, enforced here as well.
        if plant.owner.as_ref() != Some(&requester.id) || location.owner != requester.id {
            return Err(Error::Forbidden);
        }
    }
    if repo
        .try_get_instance_by_customer_and_nickname(Some(&customer), &nickname)?
        .is_some()
    {
        return Err(Error::DuplicateNickname);
    }
    let instance = PlantInstance {
        id: Id::new(),
        plant_id,
        customer: Some(customer),
        location_id,
        nickname,
        purchased_on: today,
        due_watered_on: Some(watering::proposed_due_date(today)),
        status: WateringStatus::Watered,
    };
    log::debug!("Creating new plant instance: nickname = {}", instance.nickname);
    repo.create_instance(&instance)?;
    Ok(instance)
}

#[derive(Debug, Clone)]
pub struct InstanceFormChoices {
    pub plants: Vec<Plant>,
    pub locations: Vec<Location>,
}

/// The plant/location sets selectable on the instance form: rows
/// owned by the requester, or the unrestricted sets for staff.
pub fn instance_form_choices<R: PlantRepo + LocationRepo>(
    repo: &R,
    requester: &User,
) -> Result<InstanceFormChoices> {
    authorize_role(requester, Role::Customer)?;
    let (plants, locations) = if requester.is_staff() {
        (repo.all_plants()?, repo.all_locations()?)
    } else {
        (
            repo.plants_by_owner(&requester.id)?,
            repo.locations_by_owner(&requester.id)?,
        )
    };
    Ok(InstanceFormChoices { plants, locations })
}

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct PlantUpdate {
    pub scientific_name: String,
    pub common_name: String,
    pub water_frequency: WaterFrequency,
    pub sun_exposure: SunExposure,
    pub description: String,
    pub care_tips: String,
    /// Owner reassignment. Only the staff update form exposes this
    /// field; a non-staff requester supplying it is rejected.
    pub owner: Option<Option<Id>>,
}

pub fn update_plant<R: PlantRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
    update: PlantUpdate,
) -> Result<Plant> {
    super::require_permission(permissions, requester, Permission::ChangePlant)?;
    let mut plant = repo.get_plant(id)?;
    super::require_access(requester, plant.owner.as_ref())?;
    if update.owner.is_some() && !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    let PlantUpdate {
        scientific_name,
        common_name,
        water_frequency,
        sun_exposure,
        description,
        care_tips,
        owner,
    } = update;
    let owner = owner.unwrap_or_else(|| plant.owner.clone());
    if scientific_name != plant.scientific_name || owner != plant.owner {
        if let Some(existing) =
            repo.try_get_plant_by_owner_and_scientific_name(owner.as_ref(), &scientific_name)?
        {
            if existing.id != plant.id {
                return Err(Error::DuplicateScientificName);
            }
        }
    }
    plant.owner = owner;
    plant.scientific_name = scientific_name;
    plant.common_name = common_name;
    plant.water_frequency = water_frequency;
    plant.sun_exposure = sun_exposure;
    plant.description = description;
    plant.care_tips = care_tips;
    repo.update_plant(&plant)?;
    Ok(plant)
}

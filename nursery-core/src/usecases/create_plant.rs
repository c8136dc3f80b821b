use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlant {
    pub scientific_name: String,
    pub common_name: String,
    pub water_frequency: WaterFrequency,
    pub sun_exposure: SunExposure,
    pub description: String,
    pub care_tips: String,
}

/// The requester becomes the owner of the new catalog entry.
pub fn create_plant<R: PlantRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    new_plant: NewPlant,
) -> Result<Plant> {
    super::require_permission(permissions, requester, Permission::AddPlant)?;
    let NewPlant {
        scientific_name,
        common_name,
        water_frequency,
        sun_exposure,
        description,
        care_tips,
    } = new_plant;
    if repo
        .try_get_plant_by_owner_and_scientific_name(Some(&requester.id), &scientific_name)?
        .is_some()
    {
        return Err(Error::DuplicateScientificName);
    }
    let plant = Plant {
        id: Id::new(),
        owner: Some(requester.id.clone()),
        scientific_name,
        common_name,
        water_frequency,
        sun_exposure,
        description,
        care_tips,
    };
    log::debug!(
        "Creating new plant: scientific name = {}",
        plant.scientific_name
    );
    repo.create_plant(&plant)?;
    Ok(plant)
}

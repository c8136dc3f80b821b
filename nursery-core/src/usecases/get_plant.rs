use super::prelude::*;

#[derive(Debug, Clone)]
pub struct PlantDetail {
    pub plant: Plant,
    pub instances: Vec<PlantInstance>,
}

/// One catalog entry plus the related inventory records.
///
/// Related instances are those of the requesting user; staff see every
/// instance of the plant. Catalog authorship and instance ownership are
/// deliberately kept apart here.
pub fn get_plant<R: PlantRepo + PlantInstanceRepo>(
    repo: &R,
    requester: &User,
    id: &Id,
) -> Result<PlantDetail> {
    let plant = repo.get_plant(id)?;
    super::require_visibility(requester, plant.owner.as_ref())?;
    let mut instances = repo.instances_of_plant(id)?;
    if !requester.is_staff() {
        instances.retain(|instance| instance.customer.as_ref() == Some(&requester.id));
    }
    Ok(PlantDetail { plant, instances })
}

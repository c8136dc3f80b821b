use time::Date;

use super::*;

pub fn create_instance(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    today: Date,
    new_instance: usecases::NewPlantInstance,
) -> Result<PlantInstance> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_instance(conn, permissions, requester, today, new_instance).map_err(
            |err| {
                log::warn!("Failed to create plant instance: {err}");
                err
            },
        )
    })?)
}

/// Prefill variant: the catalog entry is fixed by the calling route,
/// everything else defaults as in [`create_instance`].
pub fn create_instance_for_plant(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    today: Date,
    plant_id: &Id,
    location_id: Id,
    nickname: String,
) -> Result<PlantInstance> {
    create_instance(
        connections,
        permissions,
        requester,
        today,
        usecases::NewPlantInstance {
            plant_id: plant_id.clone(),
            location_id,
            nickname,
            customer: None,
        },
    )
}

/// Prefill variant: the location is fixed by the calling route.
pub fn create_instance_at_location(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    today: Date,
    location_id: &Id,
    plant_id: Id,
    nickname: String,
) -> Result<PlantInstance> {
    create_instance(
        connections,
        permissions,
        requester,
        today,
        usecases::NewPlantInstance {
            plant_id,
            location_id: location_id.clone(),
            nickname,
            customer: None,
        },
    )
}

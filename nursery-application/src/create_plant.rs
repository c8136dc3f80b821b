use super::*;

pub fn create_plant(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    new_plant: usecases::NewPlant,
) -> Result<Plant> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_plant(conn, permissions, requester, new_plant).map_err(|err| {
            log::warn!("Failed to create plant: {err}");
            err
        })
    })?)
}

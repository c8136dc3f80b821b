use super::*;

pub fn update_plant(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
    update: usecases::PlantUpdate,
) -> Result<Plant> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_plant(conn, permissions, requester, id, update).map_err(|err| {
            log::warn!("Failed to update plant {id}: {err}");
            err
        })
    })?)
}

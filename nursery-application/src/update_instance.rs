use super::*;

pub fn update_instance(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
    update: usecases::PlantInstanceUpdate,
) -> Result<PlantInstance> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_instance(conn, permissions, requester, id, update).map_err(|err| {
            log::warn!("Failed to update plant instance {id}: {err}");
            err
        })
    })?)
}

use super::*;

pub fn update_location(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
    update: usecases::LocationUpdate,
) -> Result<Location> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_location(conn, permissions, requester, id, update).map_err(|err| {
            log::warn!("Failed to update location {id}: {err}");
            err
        })
    })?)
}

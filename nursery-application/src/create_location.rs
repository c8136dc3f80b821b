use super::*;

pub fn create_location(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    new_location: usecases::NewLocation,
) -> Result<Location> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_location(conn, permissions, requester, new_location).map_err(|err| {
            log::warn!("Failed to create location: {err}");
            err
        })
    })?)
}

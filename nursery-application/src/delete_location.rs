use super::*;

pub fn delete_location(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_location(conn, permissions, requester, id).map_err(|err| {
            log::warn!("Failed to delete location {id}: {err}");
            err
        })
    })?)
}

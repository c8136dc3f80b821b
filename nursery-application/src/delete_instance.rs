use super::*;

pub fn delete_instance(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_instance(conn, permissions, requester, id).map_err(|err| {
            log::warn!("Failed to delete plant instance {id}: {err}");
            err
        })
    })?)
}

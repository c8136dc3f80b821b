use super::*;

pub fn create_common_name(
    connections: &sqlite::Connections,
    requester: &User,
    name: String,
) -> Result<CommonName> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_common_name(conn, requester, name).map_err(|err| {
            log::warn!("Failed to create common name: {err}");
            err
        })
    })?)
}

pub fn delete_common_name(
    connections: &sqlite::Connections,
    requester: &User,
    id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_common_name(conn, requester, id).map_err(|err| {
            log::warn!("Failed to delete common name {id}: {err}");
            err
        })
    })?)
}

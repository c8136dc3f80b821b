use time::Date;

use super::*;

pub fn renew_due_watered(
    connections: &sqlite::Connections,
    requester: &User,
    id: &Id,
    today: Date,
    renewal_date: Date,
) -> Result<PlantInstance> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::renew_due_watered(conn, requester, id, today, renewal_date).map_err(|err| {
            log::warn!("Failed to renew due-watered date of plant instance {id}: {err}");
            err
        })
    })?)
}

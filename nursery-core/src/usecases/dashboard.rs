use super::prelude::*;

/// Aggregate counts for the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub plants: usize,
    pub instances: usize,
    pub watered_instances: usize,
    pub locations: usize,
    /// Visits within the current session, including this one.
    pub visits: u64,
}

/// `session_visits` is the counter stored in the externally owned
/// session; the caller persists the incremented value returned in
/// [`Dashboard::visits`].
pub fn dashboard<R: Db>(repo: &R, session_visits: u64) -> Result<Dashboard> {
    Ok(Dashboard {
        plants: repo.count_plants()?,
        instances: repo.count_instances()?,
        watered_instances: repo.count_instances_with_status(WateringStatus::Watered)?,
        locations: repo.count_locations()?,
        visits: session_visits + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{create_default_instance, MockDb, TestUsers},
        *,
    };

    #[test]
    fn counts_and_visits() {
        let db = MockDb::default();
        let users = TestUsers::default();
        create_default_instance(&db, &users.customer);

        let dashboard = dashboard(&db, 0).unwrap();
        assert_eq!(dashboard.plants, 1);
        assert_eq!(dashboard.instances, 1);
        assert_eq!(dashboard.watered_instances, 1);
        assert_eq!(dashboard.locations, 1);
        assert_eq!(dashboard.visits, 1);
    }
}

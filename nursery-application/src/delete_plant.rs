use super::*;

pub fn delete_plant(
    connections: &sqlite::Connections,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_plant(conn, permissions, requester, id).map_err(|err| {
            log::warn!("Failed to delete plant {id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn deletes_an_unreferenced_entry() {
        let fixture = BackendFixture::new();
        let customer = fixture.create_user("customer@example.org", Role::Customer);
        let plant = fixture.create_plant(&customer, "Ficus benjamina");
        flows::delete_plant(
            &fixture.db_connections,
            &fixture.permissions,
            &customer,
            &plant.id,
        )
        .unwrap();
        assert!(matches!(
            fixture.db_connections.shared().unwrap().get_plant(&plant.id),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn referenced_entries_are_kept() {
        let fixture = BackendFixture::new();
        let customer = fixture.create_user("customer@example.org", Role::Customer);
        let plant = fixture.create_plant(&customer, "Ficus benjamina");
        let location = fixture.create_location(&customer, "Kitchen window");
        let instance = fixture.create_instance(&customer, &plant, &location, "Fred");
        let result = flows::delete_plant(
            &fixture.db_connections,
            &fixture.permissions,
            &customer,
            &plant.id,
        );
        assert!(matches!(
            result,
            Err(AppError::Business(BError::Usecase(
                usecases::Error::StillReferenced
            )))
        ));
        // neither the entry nor the instance has been touched
        assert!(fixture.db_connections.shared().unwrap().get_plant(&plant.id).is_ok());
        assert!(fixture.try_get_instance(&instance.id).is_some());
    }
}

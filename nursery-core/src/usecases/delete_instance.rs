use super::prelude::*;

pub fn delete_instance<R: PlantInstanceRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
) -> Result<()> {
    super::require_permission(permissions, requester, Permission::DeletePlantInstance)?;
    let instance = repo.get_instance(id)?;
    super::require_access(requester, instance.customer.as_ref())?;
    repo.delete_instance(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{create_default_instance, MockDb, MockPermissions, TestUsers},
        *,
    };

    #[test]
    fn customer_may_delete_own_instance() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let (_, _, instance) = create_default_instance(&db, &users.customer);
        assert!(delete_instance(
            &db,
            &MockPermissions::grant_all(),
            &users.customer,
            &instance.id
        )
        .is_ok());
        assert!(db.instances.borrow().is_empty());
    }

    #[test]
    fn non_customer_is_rejected_and_row_still_present() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let (_, _, instance) = create_default_instance(&db, &users.customer);
        assert!(matches!(
            delete_instance(
                &db,
                &MockPermissions::grant_all(),
                &users.other_customer,
                &instance.id
            ),
            Err(Error::Forbidden)
        ));
        assert!(db.get_instance(&instance.id).is_ok());
    }

    #[test]
    fn staff_may_delete_any_instance() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let (_, _, instance) = create_default_instance(&db, &users.customer);
        assert!(
            delete_instance(&db, &MockPermissions::grant_all(), &users.staff, &instance.id).is_ok()
        );
        assert!(db.instances.borrow().is_empty());
    }

    #[test]
    fn deleting_an_instance_never_cascades() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let (plant, location, instance) = create_default_instance(&db, &users.customer);
        delete_instance(&db, &MockPermissions::grant_all(), &users.customer, &instance.id)
            .unwrap();
        assert!(db.get_plant(&plant.id).is_ok());
        assert!(db.get_location(&location.id).is_ok());
    }
}

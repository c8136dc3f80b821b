use super::prelude::*;

#[derive(Debug, Clone)]
pub struct LocationUpdate {
    pub name: String,
    /// Owner reassignment, exposed by the staff form only.
    pub owner: Option<Id>,
}

pub fn update_location<R: LocationRepo>(
    repo: &R,
    permissions: &dyn PermissionGateway,
    requester: &User,
    id: &Id,
    update: LocationUpdate,
) -> Result<Location> {
    super::require_permission(permissions, requester, Permission::ChangeLocation)?;
    let mut location = repo.get_location(id)?;
    super::require_access(requester, Some(&location.owner))?;
    if update.owner.is_some() && !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    let LocationUpdate { name, owner } = update;
    if !name.eq_ignore_ascii_case(&location.name) {
        if let Some(existing) = repo.try_get_location_by_name(&name)? {
            if existing.id != location.id {
                return Err(Error::DuplicateLocationName);
            }
        }
    }
    location.name = name;
    if let Some(owner) = owner {
        location.owner = owner;
    }
    repo.update_location(&location)?;
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{create_default_location, MockDb, MockPermissions, TestUsers},
        *,
    };

    #[test]
    fn owner_may_rename_own_location() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let location = create_default_location(&db, &users.customer);
        let updated = update_location(
            &db,
            &MockPermissions::grant_all(),
            &users.customer,
            &location.id,
            LocationUpdate {
                name: "South sill".into(),
                owner: None,
            },
        )
        .unwrap();
        assert_eq!(updated.name, "South sill");
    }

    #[test]
    fn non_owner_is_rejected() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let location = create_default_location(&db, &users.customer);
        assert!(matches!(
            update_location(
                &db,
                &MockPermissions::grant_all(),
                &users.other_customer,
                &location.id,
                LocationUpdate {
                    name: "Taken over".into(),
                    owner: None,
                },
            ),
            Err(Error::Forbidden)
        ));
        assert_eq!(db.get_location(&location.id).unwrap(), location);
    }

    #[test]
    fn rename_to_existing_name_is_rejected() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let location = create_default_location(&db, &users.customer);
        let other = Location {
            id: Id::new(),
            owner: users.customer.id.clone(),
            name: "Balcony".into(),
        };
        db.create_location(&other).unwrap();
        assert!(matches!(
            update_location(
                &db,
                &MockPermissions::grant_all(),
                &users.customer,
                &other.id,
                LocationUpdate {
                    name: location.name.to_uppercase(),
                    owner: None,
                },
            ),
            Err(Error::DuplicateLocationName)
        ));
    }
}

use super::prelude::*;

/// Staff view over the whole catalog, ordered by scientific name.
pub fn all_plants<R: PlantRepo>(repo: &R, requester: &User) -> Result<Vec<Plant>> {
    if !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    Ok(repo.all_plants()?)
}

/// Catalog entries authored by the requester, ordered by scientific name.
pub fn plants_by_owner<R: PlantRepo>(repo: &R, requester: &User) -> Result<Vec<Plant>> {
    authorize_role(requester, Role::Customer)?;
    Ok(repo.plants_by_owner(&requester.id)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{create_default_plant, guest_user, MockDb, TestUsers},
        *,
    };

    #[test]
    fn staff_list_contains_all_rows() {
        let db = MockDb::default();
        let users = TestUsers::default();
        create_default_plant(&db, &users.customer);
        create_default_plant(&db, &users.other_customer);
        assert_eq!(all_plants(&db, &users.staff).unwrap().len(), 2);
        assert!(matches!(
            all_plants(&db, &users.customer),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn owner_list_is_scoped_and_ordered() {
        let db = MockDb::default();
        let users = TestUsers::default();
        let mut monstera = create_default_plant(&db, &users.customer);
        monstera.id = Id::new();
        monstera.scientific_name = "Aloe vera".into();
        db.create_plant(&monstera).unwrap();
        create_default_plant(&db, &users.other_customer);

        let plants = plants_by_owner(&db, &users.customer).unwrap();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].scientific_name, "Aloe vera");
    }

    #[test]
    fn guests_cannot_list_their_plants() {
        let db = MockDb::default();
        assert!(matches!(
            plants_by_owner(&db, &guest_user()),
            Err(Error::Unauthorized)
        ));
    }
}

use super::*;

impl<'a> LocationRepo for DbReadOnly<'a> {
    fn create_location(&self, _location: &Location) -> Result<()> {
        unreachable!();
    }
    fn update_location(&self, _location: &Location) -> Result<()> {
        unreachable!();
    }
    fn delete_location(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_location(&self, id: &Id) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn locations_by_owner(&self, owner: &Id) -> Result<Vec<Location>> {
        locations_by_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn try_get_location_by_name(&self, name: &str) -> Result<Option<Location>> {
        try_get_location_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl<'a> LocationRepo for DbReadWrite<'a> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }
    fn delete_location(&self, id: &Id) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: &Id) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn locations_by_owner(&self, owner: &Id) -> Result<Vec<Location>> {
        locations_by_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn try_get_location_by_name(&self, name: &str) -> Result<Option<Location>> {
        try_get_location_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl<'a> LocationRepo for DbConnection<'a> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }
    fn delete_location(&self, id: &Id) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: &Id) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn locations_by_owner(&self, owner: &Id) -> Result<Vec<Location>> {
        locations_by_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn try_get_location_by_name(&self, name: &str) -> Result<Option<Location>> {
        try_get_location_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    let model = models::NewLocation::from(location);
    diesel::insert_into(schema::locations::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    use schema::locations::dsl;
    let model = models::NewLocation::from(location);
    let count = diesel::update(dsl::locations.filter(dsl::id.eq(model.id)))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_location(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::delete(dsl::locations.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_location(conn: &mut SqliteConnection, id: &Id) -> Result<Location> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .order_by(dsl::name.asc())
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn locations_by_owner(conn: &mut SqliteConnection, owner: &Id) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .filter(dsl::owner.eq(owner.as_str()))
        .order_by(dsl::name.asc())
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_location_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Location>> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .filter(lower(dsl::name).eq(name.to_ascii_lowercase()))
        .first::<models::LocationEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

use super::*;

impl<'a> PlantRepo for DbReadOnly<'a> {
    fn create_plant(&self, _plant: &Plant) -> Result<()> {
        unreachable!();
    }
    fn update_plant(&self, _plant: &Plant) -> Result<()> {
        unreachable!();
    }
    fn delete_plant(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_plant(&self, id: &Id) -> Result<Plant> {
        get_plant(&mut self.conn.borrow_mut(), id)
    }
    fn all_plants(&self) -> Result<Vec<Plant>> {
        all_plants(&mut self.conn.borrow_mut())
    }
    fn plants_by_owner(&self, owner: &Id) -> Result<Vec<Plant>> {
        plants_by_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn try_get_plant_by_owner_and_scientific_name(
        &self,
        owner: Option<&Id>,
        scientific_name: &str,
    ) -> Result<Option<Plant>> {
        try_get_plant_by_owner_and_scientific_name(
            &mut self.conn.borrow_mut(),
            owner,
            scientific_name,
        )
    }
    fn count_plants(&self) -> Result<usize> {
        count_plants(&mut self.conn.borrow_mut())
    }
    fn count_plants_with_common_name(&self, name: &str) -> Result<usize> {
        count_plants_with_common_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> PlantRepo for DbReadWrite<'a> {
    fn create_plant(&self, plant: &Plant) -> Result<()> {
        create_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn update_plant(&self, plant: &Plant) -> Result<()> {
        update_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn delete_plant(&self, id: &Id) -> Result<()> {
        delete_plant(&mut self.conn.borrow_mut(), id)
    }

    fn get_plant(&self, id: &Id) -> Result<Plant> {
        get_plant(&mut self.conn.borrow_mut(), id)
    }
    fn all_plants(&self) -> Result<Vec<Plant>> {
        all_plants(&mut self.conn.borrow_mut())
    }
    fn plants_by_owner(&self, owner: &Id) -> Result<Vec<Plant>> {
        plants_by_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn try_get_plant_by_owner_and_scientific_name(
        &self,
        owner: Option<&Id>,
        scientific_name: &str,
    ) -> Result<Option<Plant>> {
        try_get_plant_by_owner_and_scientific_name(
            &mut self.conn.borrow_mut(),
            owner,
            scientific_name,
        )
    }
    fn count_plants(&self) -> Result<usize> {
        count_plants(&mut self.conn.borrow_mut())
    }
    fn count_plants_with_common_name(&self, name: &str) -> Result<usize> {
        count_plants_with_common_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> PlantRepo for DbConnection<'a> {
    fn create_plant(&self, plant: &Plant) -> Result<()> {
        create_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn update_plant(&self, plant: &Plant) -> Result<()> {
        update_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn delete_plant(&self, id: &Id) -> Result<()> {
        delete_plant(&mut self.conn.borrow_mut(), id)
    }

    fn get_plant(&self, id: &Id) -> Result<Plant> {
        get_plant(&mut self.conn.borrow_mut(), id)
    }
    fn all_plants(&self) -> Result<Vec<Plant>> {
        all_plants(&mut self.conn.borrow_mut())
    }
    fn plants_by_owner(&self, owner: &Id) -> Result<Vec<Plant>> {
        plants_by_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn try_get_plant_by_owner_and_scientific_name(
        &self,
        owner: Option<&Id>,
        scientific_name: &str,
    ) -> Result<Option<Plant>> {
        try_get_plant_by_owner_and_scientific_name(
            &mut self.conn.borrow_mut(),
            owner,
            scientific_name,
        )
    }
    fn count_plants(&self) -> Result<usize> {
        count_plants(&mut self.conn.borrow_mut())
    }
    fn count_plants_with_common_name(&self, name: &str) -> Result<usize> {
        count_plants_with_common_name(&mut self.conn.borrow_mut(), name)
    }
}

fn create_plant(conn: &mut SqliteConnection, plant: &Plant) -> Result<()> {
    let model = models::NewPlant::from(plant);
    diesel::insert_into(schema::plants::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_plant(conn: &mut SqliteConnection, plant: &Plant) -> Result<()> {
    use schema::plants::dsl;
    let model = models::NewPlant::from(plant);
    let count = diesel::update(dsl::plants.filter(dsl::id.eq(model.id)))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_plant(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::plants::dsl;
    let count = diesel::delete(dsl::plants.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_plant(conn: &mut SqliteConnection, id: &Id) -> Result<Plant> {
    use schema::plants::dsl;
    Ok(dsl::plants
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::PlantEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()?)
}

fn all_plants(conn: &mut SqliteConnection) -> Result<Vec<Plant>> {
    use schema::plants::dsl;
    dsl::plants
        .order_by(dsl::scientific_name.asc())
        .load::<models::PlantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| model.try_into().map_err(repo::Error::Other))
        .collect()
}

fn plants_by_owner(conn: &mut SqliteConnection, owner: &Id) -> Result<Vec<Plant>> {
    use schema::plants::dsl;
    dsl::plants
        .filter(dsl::owner.eq(owner.as_str()))
        .order_by(dsl::scientific_name.asc())
        .load::<models::PlantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| model.try_into().map_err(repo::Error::Other))
        .collect()
}

fn try_get_plant_by_owner_and_scientific_name(
    conn: &mut SqliteConnection,
    owner: Option<&Id>,
    scientific_name: &str,
) -> Result<Option<Plant>> {
    use schema::plants::dsl;
    let model = match owner {
        Some(owner) => dsl::plants
            .filter(dsl::owner.eq(owner.as_str()))
            .filter(dsl::scientific_name.eq(scientific_name))
            .first::<models::PlantEntity>(conn)
            .optional(),
        None => dsl::plants
            .filter(dsl::owner.is_null())
            .filter(dsl::scientific_name.eq(scientific_name))
            .first::<models::PlantEntity>(conn)
            .optional(),
    }
    .map_err(from_diesel_err)?;
    model
        .map(|model| model.try_into().map_err(repo::Error::Other))
        .transpose()
}

fn count_plants(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::plants::dsl;
    Ok(dsl::plants
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_plants_with_common_name(conn: &mut SqliteConnection, name: &str) -> Result<usize> {
    use schema::plants::dsl;
    Ok(dsl::plants
        .filter(lower(dsl::common_name).eq(name.to_ascii_lowercase()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

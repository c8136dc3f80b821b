use super::*;

impl<'a> PlantInstanceRepo for DbReadOnly<'a> {
    fn create_instance(&self, _instance: &PlantInstance) -> Result<()> {
        unreachable!();
    }
    fn update_instance(&self, _instance: &PlantInstance) -> Result<()> {
        unreachable!();
    }
    fn delete_instance(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_instance(&self, id: &Id) -> Result<PlantInstance> {
        get_instance(&mut self.conn.borrow_mut(), id)
    }
    fn all_instances(&self) -> Result<Vec<PlantInstance>> {
        all_instances(&mut self.conn.borrow_mut())
    }
    fn instances_by_customer(&self, customer: &Id) -> Result<Vec<PlantInstance>> {
        instances_by_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn instances_due_by(&self, customer: &Id, due_by: Date) -> Result<Vec<PlantInstance>> {
        instances_due_by(&mut self.conn.borrow_mut(), customer, due_by)
    }
    fn instances_by_customer_with_status(
        &self,
        customer: &Id,
        status: WateringStatus,
    ) -> Result<Vec<PlantInstance>> {
        instances_by_customer_with_status(&mut self.conn.borrow_mut(), customer, status)
    }
    fn instances_of_plant(&self, plant_id: &Id) -> Result<Vec<PlantInstance>> {
        instances_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn try_get_instance_by_customer_and_nickname(
        &self,
        customer: Option<&Id>,
        nickname: &str,
    ) -> Result<Option<PlantInstance>> {
        try_get_instance_by_customer_and_nickname(&mut self.conn.borrow_mut(), customer, nickname)
    }
    fn count_instances(&self) -> Result<usize> {
        count_instances(&mut self.conn.borrow_mut())
    }
    fn count_instances_with_status(&self, status: WateringStatus) -> Result<usize> {
        count_instances_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_instances_of_plant(&self, plant_id: &Id) -> Result<usize> {
        count_instances_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn count_instances_of_location(&self, location_id: &Id) -> Result<usize> {
        count_instances_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

impl<'a> PlantInstanceRepo for DbReadWrite<'a> {
    fn create_instance(&self, instance: &PlantInstance) -> Result<()> {
        create_instance(&mut self.conn.borrow_mut(), instance)
    }
    fn update_instance(&self, instance: &PlantInstance) -> Result<()> {
        update_instance(&mut self.conn.borrow_mut(), instance)
    }
    fn delete_instance(&self, id: &Id) -> Result<()> {
        delete_instance(&mut self.conn.borrow_mut(), id)
    }

    fn get_instance(&self, id: &Id) -> Result<PlantInstance> {
        get_instance(&mut self.conn.borrow_mut(), id)
    }
    fn all_instances(&self) -> Result<Vec<PlantInstance>> {
        all_instances(&mut self.conn.borrow_mut())
    }
    fn instances_by_customer(&self, customer: &Id) -> Result<Vec<PlantInstance>> {
        instances_by_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn instances_due_by(&self, customer: &Id, due_by: Date) -> Result<Vec<PlantInstance>> {
        instances_due_by(&mut self.conn.borrow_mut(), customer, due_by)
    }
    fn instances_by_customer_with_status(
        &self,
        customer: &Id,
        status: WateringStatus,
    ) -> Result<Vec<PlantInstance>> {
        instances_by_customer_with_status(&mut self.conn.borrow_mut(), customer, status)
    }
    fn instances_of_plant(&self, plant_id: &Id) -> Result<Vec<PlantInstance>> {
        instances_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn try_get_instance_by_customer_and_nickname(
        &self,
        customer: Option<&Id>,
        nickname: &str,
    ) -> Result<Option<PlantInstance>> {
        try_get_instance_by_customer_and_nickname(&mut self.conn.borrow_mut(), customer, nickname)
    }
    fn count_instances(&self) -> Result<usize> {
        count_instances(&mut self.conn.borrow_mut())
    }
    fn count_instances_with_status(&self, status: WateringStatus) -> Result<usize> {
        count_instances_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_instances_of_plant(&self, plant_id: &Id) -> Result<usize> {
        count_instances_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn count_instances_of_location(&self, location_id: &Id) -> Result<usize> {
        count_instances_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

impl<'a> PlantInstanceRepo for DbConnection<'a> {
    fn create_instance(&self, instance: &PlantInstance) -> Result<()> {
        create_instance(&mut self.conn.borrow_mut(), instance)
    }
    fn update_instance(&self, instance: &PlantInstance) -> Result<()> {
        update_instance(&mut self.conn.borrow_mut(), instance)
    }
    fn delete_instance(&self, id: &Id) -> Result<()> {
        delete_instance(&mut self.conn.borrow_mut(), id)
    }

    fn get_instance(&self, id: &Id) -> Result<PlantInstance> {
        get_instance(&mut self.conn.borrow_mut(), id)
    }
    fn all_instances(&self) -> Result<Vec<PlantInstance>> {
        all_instances(&mut self.conn.borrow_mut())
    }
    fn instances_by_customer(&self, customer: &Id) -> Result<Vec<PlantInstance>> {
        instances_by_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn instances_due_by(&self, customer: &Id, due_by: Date) -> Result<Vec<PlantInstance>> {
        instances_due_by(&mut self.conn.borrow_mut(), customer, due_by)
    }
    fn instances_by_customer_with_status(
        &self,
        customer: &Id,
        status: WateringStatus,
    ) -> Result<Vec<PlantInstance>> {
        instances_by_customer_with_status(&mut self.conn.borrow_mut(), customer, status)
    }
    fn instances_of_plant(&self, plant_id: &Id) -> Result<Vec<PlantInstance>> {
        instances_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn try_get_instance_by_customer_and_nickname(
        &self,
        customer: Option<&Id>,
        nickname: &str,
    ) -> Result<Option<PlantInstance>> {
        try_get_instance_by_customer_and_nickname(&mut self.conn.borrow_mut(), customer, nickname)
    }
    fn count_instances(&self) -> Result<usize> {
        count_instances(&mut self.conn.borrow_mut())
    }
    fn count_instances_with_status(&self, status: WateringStatus) -> Result<usize> {
        count_instances_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_instances_of_plant(&self, plant_id: &Id) -> Result<usize> {
        count_instances_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn count_instances_of_location(&self, location_id: &Id) -> Result<usize> {
        count_instances_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

fn load_instances(models: Vec<models::PlantInstanceEntity>) -> Result<Vec<PlantInstance>> {
    models
        .into_iter()
        .map(|model| model.try_into().map_err(repo::Error::Other))
        .collect()
}

fn create_instance(conn: &mut SqliteConnection, instance: &PlantInstance) -> Result<()> {
    let model = models::NewPlantInstance::try_from(instance)?;
    diesel::insert_into(schema::plant_instances::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_instance(conn: &mut SqliteConnection, instance: &PlantInstance) -> Result<()> {
    use schema::plant_instances::dsl;
    let model = models::NewPlantInstance::try_from(instance)?;
    let count = diesel::update(dsl::plant_instances.filter(dsl::id.eq(&model.id)))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_instance(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::plant_instances::dsl;
    let count = diesel::delete(dsl::plant_instances.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_instance(conn: &mut SqliteConnection, id: &Id) -> Result<PlantInstance> {
    use schema::plant_instances::dsl;
    Ok(dsl::plant_instances
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::PlantInstanceEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()?)
}

fn all_instances(conn: &mut SqliteConnection) -> Result<Vec<PlantInstance>> {
    use schema::plant_instances::dsl;
    load_instances(
        dsl::plant_instances
            .order_by(dsl::customer.asc())
            .then_order_by(dsl::nickname.asc())
            .load::<models::PlantInstanceEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

// NULL due dates sort first, like instances that have never been
// scheduled in the overview.
fn instances_by_customer(conn: &mut SqliteConnection, customer: &Id) -> Result<Vec<PlantInstance>> {
    use schema::plant_instances::dsl;
    load_instances(
        dsl::plant_instances
            .filter(dsl::customer.eq(customer.as_str()))
            .order_by(dsl::due_watered_on.asc())
            .then_order_by(dsl::nickname.asc())
            .load::<models::PlantInstanceEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn instances_due_by(
    conn: &mut SqliteConnection,
    customer: &Id,
    due_by: Date,
) -> Result<Vec<PlantInstance>> {
    use schema::plant_instances::dsl;
    let due_by = util::date_to_text(due_by)?;
    load_instances(
        dsl::plant_instances
            .filter(dsl::customer.eq(customer.as_str()))
            .filter(dsl::due_watered_on.is_not_null())
            .filter(dsl::due_watered_on.le(due_by))
            .order_by(dsl::due_watered_on.asc())
            .then_order_by(dsl::nickname.asc())
            .load::<models::PlantInstanceEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn instances_by_customer_with_status(
    conn: &mut SqliteConnection,
    customer: &Id,
    status: WateringStatus,
) -> Result<Vec<PlantInstance>> {
    use schema::plant_instances::dsl;
    load_instances(
        dsl::plant_instances
            .filter(dsl::customer.eq(customer.as_str()))
            .filter(dsl::status.eq(WateringStatusPrimitive::from(status)))
            .order_by(dsl::due_watered_on.asc())
            .then_order_by(dsl::nickname.asc())
            .load::<models::PlantInstanceEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn instances_of_plant(conn: &mut SqliteConnection, plant_id: &Id) -> Result<Vec<PlantInstance>> {
    use schema::plant_instances::dsl;
    load_instances(
        dsl::plant_instances
            .filter(dsl::plant_id.eq(plant_id.as_str()))
            .order_by(dsl::nickname.asc())
            .load::<models::PlantInstanceEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn try_get_instance_by_customer_and_nickname(
    conn: &mut SqliteConnection,
    customer: Option<&Id>,
    nickname: &str,
) -> Result<Option<PlantInstance>> {
    use schema::plant_instances::dsl;
    let model = match customer {
        Some(customer) => dsl::plant_instances
            .filter(dsl::customer.eq(customer.as_str()))
            .filter(dsl::nickname.eq(nickname))
            .first::<models::PlantInstanceEntity>(conn)
            .optional(),
        None => dsl::plant_instances
            .filter(dsl::customer.is_null())
            .filter(dsl::nickname.eq(nickname))
            .first::<models::PlantInstanceEntity>(conn)
            .optional(),
    }
    .map_err(from_diesel_err)?;
    model
        .map(|model| model.try_into().map_err(repo::Error::Other))
        .transpose()
}

fn count_instances(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::plant_instances::dsl;
    Ok(dsl::plant_instances
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_instances_with_status(
    conn: &mut SqliteConnection,
    status: WateringStatus,
) -> Result<usize> {
    use schema::plant_instances::dsl;
    Ok(dsl::plant_instances
        .filter(dsl::status.eq(WateringStatusPrimitive::from(status)))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_instances_of_plant(conn: &mut SqliteConnection, plant_id: &Id) -> Result<usize> {
    use schema::plant_instances::dsl;
    Ok(dsl::plant_instances
        .filter(dsl::plant_id.eq(plant_id.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_instances_of_location(conn: &mut SqliteConnection, location_id: &Id) -> Result<usize> {
    use schema::plant_instances::dsl;
    Ok(dsl::plant_instances
        .filter(dsl::location_id.eq(location_id.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

use super::*;

impl<'a> CommonNameRepo for DbReadOnly<'a> {
    fn create_common_name(&self, _common_name: &CommonName) -> Result<()> {
        unreachable!();
    }
    fn delete_common_name(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_common_name(&self, id: &Id) -> Result<CommonName> {
        get_common_name(&mut self.conn.borrow_mut(), id)
    }
    fn all_common_names(&self) -> Result<Vec<CommonName>> {
        all_common_names(&mut self.conn.borrow_mut())
    }
    fn try_get_common_name_by_name(&self, name: &str) -> Result<Option<CommonName>> {
        try_get_common_name_by_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> CommonNameRepo for DbReadWrite<'a> {
    fn create_common_name(&self, common_name: &CommonName) -> Result<()> {
        create_common_name(&mut self.conn.borrow_mut(), common_name)
    }
    fn delete_common_name(&self, id: &Id) -> Result<()> {
        delete_common_name(&mut self.conn.borrow_mut(), id)
    }

    fn get_common_name(&self, id: &Id) -> Result<CommonName> {
        get_common_name(&mut self.conn.borrow_mut(), id)
    }
    fn all_common_names(&self) -> Result<Vec<CommonName>> {
        all_common_names(&mut self.conn.borrow_mut())
    }
    fn try_get_common_name_by_name(&self, name: &str) -> Result<Option<CommonName>> {
        try_get_common_name_by_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> CommonNameRepo for DbConnection<'a> {
    fn create_common_name(&self, common_name: &CommonName) -> Result<()> {
        create_common_name(&mut self.conn.borrow_mut(), common_name)
    }
    fn delete_common_name(&self, id: &Id) -> Result<()> {
        delete_common_name(&mut self.conn.borrow_mut(), id)
    }

    fn get_common_name(&self, id: &Id) -> Result<CommonName> {
        get_common_name(&mut self.conn.borrow_mut(), id)
    }
    fn all_common_names(&self) -> Result<Vec<CommonName>> {
        all_common_names(&mut self.conn.borrow_mut())
    }
    fn try_get_common_name_by_name(&self, name: &str) -> Result<Option<CommonName>> {
        try_get_common_name_by_name(&mut self.conn.borrow_mut(), name)
    }
}

fn create_common_name(conn: &mut SqliteConnection, common_name: &CommonName) -> Result<()> {
    let model = models::NewCommonName::from(common_name);
    diesel::insert_into(schema::common_names::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_common_name(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::common_names::dsl;
    let count = diesel::delete(dsl::common_names.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_common_name(conn: &mut SqliteConnection, id: &Id) -> Result<CommonName> {
    use schema::common_names::dsl;
    Ok(dsl::common_names
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::CommonNameEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_common_names(conn: &mut SqliteConnection) -> Result<Vec<CommonName>> {
    use schema::common_names::dsl;
    Ok(dsl::common_names
        .order_by(dsl::name.asc())
        .load::<models::CommonNameEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_common_name_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<CommonName>> {
    use schema::common_names::dsl;
    Ok(dsl::common_names
        .filter(lower(dsl::name).eq(name.to_ascii_lowercase()))
        .first::<models::CommonNameEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

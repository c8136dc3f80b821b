use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use nursery_core::{
    entities::*,
    repositories::{self as repo, *},
};
use time::Date;

use super::*;

mod common_name;
mod instance;
mod location;
mod plant;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            repo::Error::StillReferenced
        }
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    /// SQLite's built-in, ASCII-only case folding. Matches the
    /// `eq_ignore_ascii_case` comparisons in the use case layer.
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

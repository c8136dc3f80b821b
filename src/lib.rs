//! # nursery
//!
//! Facade over the workspace layers for the outer HTTP, session and
//! template collaborators.
//!
//! - [`entities`]: agnostic domain entities
//! - [`usecases`]: one function per operation, generic over the repositories
//! - [`flows`]: transactional application flows on top of SQLite
//! - [`sqlite`]: the Diesel/SQLite persistence layer

pub use nursery_entities as entities;

pub use nursery_core::{authorization, db, repositories, usecases, watering, PermissionGateway};

pub use nursery_db_sqlite as sqlite;

pub use nursery_application::{error::AppError, prelude as flows};

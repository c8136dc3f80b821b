#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # nursery-entities
//!
//! Reusable, agnostic domain entities for the nursery record keeper.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod common_name;
pub mod id;
pub mod instance;
pub mod location;
pub mod permission;
pub mod plant;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

//! Authorization primitives.
//!
//! A single composable predicate is evaluated before the body of every
//! mutating operation, instead of inheritance-based permission mixins.

mod access;
mod policy;
pub mod user;

pub use self::{access::*, policy::*, user::authorize_role};

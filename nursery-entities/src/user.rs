use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use thiserror::Error;

use crate::id::Id;

/// An account as seen by this crate.
///
/// Authentication and password storage are handled by an external
/// collaborator. Only the identity and the privilege level are
/// relevant here.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub email : String,
    pub role  : Role,
}

impl User {
    /// Staff and admins have elevated, cross-owner privileges.
    pub fn is_staff(&self) -> bool {
        self.role >= Role::Staff
    }
}

pub type RolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    Guest    = 0,
    Customer = 1,
    Staff    = 2,
    Admin    = 3,
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("role primitive")
    }
}

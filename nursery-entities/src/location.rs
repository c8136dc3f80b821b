use crate::id::Id;

/// A named storage or placement location, owned by a user.
///
/// `name` is unique per case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: Id,
    pub owner: Id,
    pub name: String,
}

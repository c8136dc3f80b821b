use crate::id::Id;

/// An immutable aliasing label for plant species, e.g. "Spider Plant".
///
/// `name` is unique per case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonName {
    pub id: Id,
    pub name: String,
}

use crate::entities::{Id, User};

/// Tagged result of an authorization predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The requester is neither staff nor the recorded owner.
    NotOwner,
}

/// May the requester mutate a record with the given owner?
///
/// Staff may mutate any record. Everyone else only their own.
/// Records without an owner (staff-authored catalog entries) are
/// mutable by staff only.
pub fn check_access(requester: &User, owner: Option<&Id>) -> AccessDecision {
    if requester.is_staff() {
        return AccessDecision::Allowed;
    }
    match owner {
        Some(owner) if *owner == requester.id => AccessDecision::Allowed,
        _ => AccessDecision::Denied(DenialReason::NotOwner),
    }
}

/// May the requester read a record with the given owner?
///
/// Same as [`check_access`], except that ownerless records are
/// globally visible.
pub fn check_visibility(requester: &User, owner: Option<&Id>) -> AccessDecision {
    match owner {
        None => AccessDecision::Allowed,
        Some(_) => check_access(requester, owner),
    }
}

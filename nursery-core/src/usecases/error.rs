use crate::{authorization, entities::Permission, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Missing the {0} permission")]
    PermissionDenied(Permission),
    #[error("A plant with this scientific name is already registered for this owner")]
    DuplicateScientificName,
    #[error("A location with this name already exists (case insensitive match)")]
    DuplicateLocationName,
    #[error("Common name already exists (case insensitive match)")]
    DuplicateCommonName,
    #[error("An instance with this nickname is already registered for this customer")]
    DuplicateNickname,
    #[error("The renewal date must lie after the submission date")]
    RenewalDateNotInFuture,
    #[error("The object is still referenced by dependent records")]
    StillReferenced,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<authorization::user::Error> for Error {
    fn from(_: authorization::user::Error) -> Self {
        Self::Unauthorized
    }
}

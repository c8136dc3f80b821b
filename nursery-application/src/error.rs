use nursery_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use std::io;
use thiserror::Error;

pub use nursery_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<UsecaseError> for AppError {
    fn from(err: UsecaseError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    R2d2(#[from] r2d2::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

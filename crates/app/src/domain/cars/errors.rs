//! Cars service errors.

use forecourt::validation::ValidationErrors;
use thiserror::Error;

use crate::{domain::OFFLINE_MESSAGE, store::StoreError};

#[derive(Debug, Error)]
pub enum CarsServiceError {
    #[error("car not found")]
    NotFound,

    #[error("car already exists")]
    AlreadyExists,

    #[error("invalid car: {0}")]
    Invalid(#[source] ValidationErrors),

    #[error("{}", OFFLINE_MESSAGE)]
    Offline,

    #[error("storage error")]
    Store(#[source] StoreError),

    #[error("invalid car document")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for CarsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(_) => Self::Offline,
            StoreError::AlreadyExists => Self::AlreadyExists,
            StoreError::Serialization(error) => Self::Serialization(error),
            other => Self::Store(other),
        }
    }
}

impl From<ValidationErrors> for CarsServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

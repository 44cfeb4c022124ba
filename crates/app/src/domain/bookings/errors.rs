//! Bookings service errors.

use forecourt::validation::ValidationErrors;
use thiserror::Error;

use crate::{domain::OFFLINE_MESSAGE, store::StoreError};

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error("booking not found")]
    NotFound,

    #[error("booking already exists")]
    AlreadyExists,

    #[error("invalid booking: {0}")]
    Invalid(#[source] ValidationErrors),

    #[error("{}", OFFLINE_MESSAGE)]
    Offline,

    #[error("storage error")]
    Store(#[source] StoreError),

    #[error("invalid booking document")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for BookingsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(_) => Self::Offline,
            StoreError::AlreadyExists => Self::AlreadyExists,
            StoreError::Serialization(error) => Self::Serialization(error),
            other => Self::Store(other),
        }
    }
}

impl From<ValidationErrors> for BookingsServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

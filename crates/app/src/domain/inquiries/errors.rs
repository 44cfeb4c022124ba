//! Inquiries service errors.

use forecourt::validation::ValidationErrors;
use thiserror::Error;

use crate::{domain::OFFLINE_MESSAGE, store::StoreError};

#[derive(Debug, Error)]
pub enum InquiriesServiceError {
    #[error("inquiry not found")]
    NotFound,

    #[error("inquiry already exists")]
    AlreadyExists,

    #[error("invalid inquiry: {0}")]
    Invalid(#[source] ValidationErrors),

    #[error("{}", OFFLINE_MESSAGE)]
    Offline,

    #[error("storage error")]
    Store(#[source] StoreError),

    #[error("invalid inquiry document")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for InquiriesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(_) => Self::Offline,
            StoreError::AlreadyExists => Self::AlreadyExists,
            StoreError::Serialization(error) => Self::Serialization(error),
            other => Self::Store(other),
        }
    }
}

impl From<ValidationErrors> for InquiriesServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

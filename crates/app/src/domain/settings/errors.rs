//! Settings service errors.

use thiserror::Error;

use crate::{domain::OFFLINE_MESSAGE, store::StoreError};

#[derive(Debug, Error)]
pub enum SettingsServiceError {
    #[error("{}", OFFLINE_MESSAGE)]
    Offline,

    #[error("storage error")]
    Store(#[source] StoreError),

    #[error("invalid settings document")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for SettingsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(_) => Self::Offline,
            StoreError::Serialization(error) => Self::Serialization(error),
            other => Self::Store(other),
        }
    }
}

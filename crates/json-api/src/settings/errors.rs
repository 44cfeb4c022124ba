//! Errors

use salvo::http::StatusError;
use tracing::error;

use forecourt_app::domain::{OFFLINE_MESSAGE, settings::SettingsServiceError};

pub(crate) fn into_status_error(error: SettingsServiceError) -> StatusError {
    match error {
        SettingsServiceError::Offline => StatusError::service_unavailable().brief(OFFLINE_MESSAGE),
        SettingsServiceError::Store(source) => {
            error!("settings storage failed: {source}");

            StatusError::internal_server_error()
        }
        SettingsServiceError::Serialization(source) => {
            error!("invalid settings document: {source}");

            StatusError::internal_server_error()
        }
    }
}

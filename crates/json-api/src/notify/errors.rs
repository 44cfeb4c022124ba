//! Errors

use salvo::http::StatusError;
use tracing::error;

use forecourt_app::{domain::OFFLINE_MESSAGE, store::StoreError};

pub(crate) fn into_status_error(error: StoreError) -> StatusError {
    if error.is_unavailable() {
        return StatusError::service_unavailable().brief(OFFLINE_MESSAGE);
    }

    error!("device token storage failed: {error}");

    StatusError::internal_server_error()
}

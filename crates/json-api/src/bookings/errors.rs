//! Errors

use salvo::http::StatusError;
use tracing::error;

use forecourt_app::domain::{OFFLINE_MESSAGE, bookings::BookingsServiceError};

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        BookingsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Booking already exists")
        }
        BookingsServiceError::Invalid(errors) => StatusError::bad_request()
            .brief("Invalid booking payload")
            .detail(errors.to_string()),
        BookingsServiceError::Offline => StatusError::service_unavailable().brief(OFFLINE_MESSAGE),
        BookingsServiceError::Store(source) => {
            error!("booking storage failed: {source}");

            StatusError::internal_server_error()
        }
        BookingsServiceError::Serialization(source) => {
            error!("invalid booking document: {source}");

            StatusError::internal_server_error()
        }
    }
}

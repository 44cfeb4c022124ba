//! Errors

use salvo::http::StatusError;
use tracing::error;

use forecourt_app::domain::{OFFLINE_MESSAGE, inquiries::InquiriesServiceError};

pub(crate) fn into_status_error(error: InquiriesServiceError) -> StatusError {
    match error {
        InquiriesServiceError::NotFound => StatusError::not_found().brief("Inquiry not found"),
        InquiriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Inquiry already exists")
        }
        InquiriesServiceError::Invalid(errors) => StatusError::bad_request()
            .brief("Invalid inquiry payload")
            .detail(errors.to_string()),
        InquiriesServiceError::Offline => {
            StatusError::service_unavailable().brief(OFFLINE_MESSAGE)
        }
        InquiriesServiceError::Store(source) => {
            error!("inquiry storage failed: {source}");

            StatusError::internal_server_error()
        }
        InquiriesServiceError::Serialization(source) => {
            error!("invalid inquiry document: {source}");

            StatusError::internal_server_error()
        }
    }
}

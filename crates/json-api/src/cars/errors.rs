//! Errors

use salvo::http::StatusError;
use tracing::error;

use forecourt_app::domain::{OFFLINE_MESSAGE, cars::CarsServiceError};

pub(crate) fn into_status_error(error: CarsServiceError) -> StatusError {
    match error {
        CarsServiceError::NotFound => StatusError::not_found().brief("Car not found"),
        CarsServiceError::AlreadyExists => StatusError::conflict().brief("Car already exists"),
        CarsServiceError::Invalid(errors) => StatusError::bad_request()
            .brief("Invalid car payload")
            .detail(errors.to_string()),
        CarsServiceError::Offline => StatusError::service_unavailable().brief(OFFLINE_MESSAGE),
        CarsServiceError::Store(source) => {
            error!("car storage failed: {source}");

            StatusError::internal_server_error()
        }
        CarsServiceError::Serialization(source) => {
            error!("invalid car document: {source}");

            StatusError::internal_server_error()
        }
    }
}

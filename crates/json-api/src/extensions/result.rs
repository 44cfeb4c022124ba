//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map any error to an HTTP error.
pub(crate) trait ResultExt<T> {
    /// A logged internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// A bad request carrying the error as detail.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{brief}: {error}");

            StatusError::bad_request()
                .brief(brief)
                .detail(error.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_map_to_status_codes() {
        let bad: Result<(), &str> = Err("unknown sort order: price");

        let error = bad.or_400("invalid query").err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error.and_then(|e| e.detail),
            Some("unknown sort order: price".to_string())
        );

        let failed: Result<(), &str> = Err("boom");

        assert_eq!(
            failed.or_500("failed").err().map(|e| e.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}

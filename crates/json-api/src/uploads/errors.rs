//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use forecourt_app::uploads::UploadError;

use crate::observability::observe_uploads;

pub(crate) fn into_status_error(error: UploadError) -> StatusError {
    observe_uploads(if error.is_rejected() { "rejected" } else { "failed" }, 1);

    match error {
        UploadError::UnsupportedType(_) | UploadError::Empty => {
            warn!("upload rejected: {error}");

            StatusError::bad_request()
                .brief("Invalid image upload")
                .detail(error.to_string())
        }
        UploadError::TooLarge(_) => StatusError::payload_too_large()
            .brief("Image too large")
            .detail(error.to_string()),
        UploadError::Http(_) | UploadError::UnexpectedResponse(_) => {
            error!("blob store upload failed: {error}");

            StatusError::bad_gateway()
        }
        UploadError::Io(source) => {
            error!("failed to write upload: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use forecourt_app::uploads::MAX_UPLOAD_BYTES;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn rejections_are_client_errors() {
        assert_eq!(
            into_status_error(UploadError::UnsupportedType("text/plain".to_string())).code,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            into_status_error(UploadError::TooLarge(MAX_UPLOAD_BYTES + 1)).code,
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            into_status_error(UploadError::UnexpectedResponse("503".to_string())).code,
            StatusCode::BAD_GATEWAY
        );
    }
}

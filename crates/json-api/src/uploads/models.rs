//! Upload Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt_app::uploads::StoredUpload;

/// A stored image.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Public URL of the image
    pub url: String,

    /// Generated file name, `<unix-millis>-<uuid>.<ext>`
    pub filename: String,
}

impl From<StoredUpload> for UploadResponse {
    fn from(stored: StoredUpload) -> Self {
        UploadResponse {
            url: stored.url,
            filename: stored.filename,
        }
    }
}

/// Several stored images, in upload order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadsResponse {
    pub urls: Vec<String>,
}

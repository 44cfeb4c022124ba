//! Multipart file parts.

use salvo::{http::form::FilePart, prelude::*};

use forecourt_app::uploads::{ImageUpload, MAX_UPLOAD_BYTES};

use crate::extensions::*;

/// Most images accepted by one multi-file request.
pub(crate) const MAX_IMAGES_PER_REQUEST: usize = 10;

/// Body limit for upload requests. Oversized files still parse so they can be rejected
/// with a precise error.
const MULTIPART_LIMIT: usize = MAX_UPLOAD_BYTES * (MAX_IMAGES_PER_REQUEST + 1);

pub(crate) fn allow_large_body(req: &mut Request) {
    req.set_secure_max_size(MULTIPART_LIMIT);
}

/// Read a spooled file part into memory.
pub(crate) async fn read_upload(file: &FilePart) -> Result<ImageUpload, StatusError> {
    let bytes = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded file")?;

    let content_type = file
        .content_type()
        .map(|mime| mime.to_string())
        .unwrap_or_default();

    Ok(ImageUpload {
        content_type,
        bytes,
    })
}

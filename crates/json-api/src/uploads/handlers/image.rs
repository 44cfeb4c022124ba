//! Upload Image Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    observability::observe_uploads,
    uploads::{
        errors::into_status_error,
        models::UploadResponse,
        multipart::{allow_large_body, read_upload},
    },
};

/// Upload Image Handler
///
/// Accepts one JPEG, PNG, WebP, GIF or AVIF image of up to 5 MiB in the `file` field.
#[endpoint(
    tags("uploads"),
    summary = "Upload Image",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or unsupported file"),
        (status_code = StatusCode::PAYLOAD_TOO_LARGE, description = "Image too large"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Blob store failed"),
    ),
)]
#[tracing::instrument(name = "uploads.image", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.state_or_500()?;

    allow_large_body(req);

    let file = req
        .file("file")
        .await
        .ok_or_else(|| StatusError::bad_request().brief("Missing file field"))?;

    let upload = read_upload(file).await?;

    let stored = state
        .app
        .uploads
        .upload_image(upload)
        .await
        .map_err(into_status_error)?;

    observe_uploads("stored", 1);

    Ok(Json(stored.into()))
}

//! Upload Images Handler

use salvo::prelude::*;

use forecourt_app::uploads::validate;

use crate::{
    extensions::*,
    observability::observe_uploads,
    uploads::{
        errors::into_status_error,
        models::UploadsResponse,
        multipart::{MAX_IMAGES_PER_REQUEST, allow_large_body, read_upload},
    },
};

/// Upload Images Handler
///
/// Accepts up to ten images in repeated `files` fields. Every file is checked before any is
/// stored, so one bad file rejects the whole request.
#[endpoint(
    tags("uploads"),
    summary = "Upload Images",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Images stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or unsupported files"),
        (status_code = StatusCode::PAYLOAD_TOO_LARGE, description = "Image too large"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Blob store failed"),
    ),
)]
#[tracing::instrument(name = "uploads.images", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    allow_large_body(req);

    let files = req
        .files("files")
        .await
        .filter(|files| !files.is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("Missing files field"))?;

    if files.len() > MAX_IMAGES_PER_REQUEST {
        return Err(StatusError::bad_request()
            .brief("Too many files")
            .detail(format!("at most {MAX_IMAGES_PER_REQUEST} images per request")));
    }

    let mut uploads = Vec::with_capacity(files.len());

    for file in files {
        let upload = read_upload(file).await?;

        validate(&upload).map_err(into_status_error)?;

        uploads.push(upload);
    }

    let mut urls = Vec::with_capacity(uploads.len());

    for upload in uploads {
        let stored = state
            .app
            .uploads
            .upload_image(upload)
            .await
            .map_err(into_status_error)?;

        urls.push(stored.url);
    }

    tracing::info!(count = urls.len(), "stored images");

    observe_uploads("stored", urls.len());

    Ok(Json(UploadsResponse { urls }))
}

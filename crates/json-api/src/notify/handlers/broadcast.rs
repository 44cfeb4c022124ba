//! Broadcast Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use forecourt_app::notifications::Notification;

use crate::{
    extensions::*,
    notify::models::{BroadcastRequest, BroadcastResponse},
};

/// Broadcast Handler
///
/// Pushes a message to every registered device. Email is never used.
#[endpoint(
    tags("notify"),
    summary = "Broadcast",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Broadcast attempted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing title"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
    ),
)]
#[tracing::instrument(name = "notify.broadcast", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<BroadcastRequest>,
    depot: &mut Depot,
) -> Result<Json<BroadcastResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let BroadcastRequest { title, body } = json.into_inner();

    if title.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Broadcast title is required"));
    }

    let report = state
        .app
        .notifier
        .broadcast(&Notification::new(title, body))
        .await;

    Ok(Json(BroadcastResponse {
        ok: true,
        push: report.push.as_str().to_string(),
    }))
}

//! Register Device Token Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    notify::{
        errors::into_status_error,
        models::{DeviceTokenResponse, RegisterTokenRequest},
    },
};

/// Register Device Token Handler
///
/// Registers an admin device for push notifications. Registering a known token refreshes it.
#[endpoint(
    tags("notify"),
    summary = "Register Device Token",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Device registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Blank token"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "notify.register_token", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<RegisterTokenRequest>,
    depot: &mut Depot,
) -> Result<Json<DeviceTokenResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let token = json.into_inner().token;
    let token = token.trim();

    if token.is_empty() {
        return Err(StatusError::bad_request().brief("Device token is required"));
    }

    let device = state
        .app
        .notifier
        .register_token(token)
        .await
        .map_err(into_status_error)?;

    Ok(Json(device.into()))
}

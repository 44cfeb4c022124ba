//! Get Settings Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    settings::{errors::into_status_error, models::SettingsResponse},
};

/// Get Settings Handler
///
/// Stored settings overlaid on the defaults. The defaults alone are returned when nothing is
/// stored or the store is unreachable.
#[endpoint(tags("settings"), summary = "Get Website Settings")]
#[tracing::instrument(name = "settings.get", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SettingsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let settings = state
        .app
        .settings
        .get_settings()
        .await
        .map_err(into_status_error)?;

    Ok(Json(settings.into()))
}

//! Update Settings Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    settings::{
        errors::into_status_error,
        models::{SettingsPatchRequest, SettingsResponse},
    },
};

/// Update Settings Handler
///
/// Merges the supplied fields into the stored settings and returns the result.
#[endpoint(
    tags("settings"),
    summary = "Update Website Settings",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Settings updated"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "settings.update", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<SettingsPatchRequest>,
    depot: &mut Depot,
) -> Result<Json<SettingsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let settings = state
        .app
        .settings
        .update_settings(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!("updated website settings");

    Ok(Json(settings.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use forecourt::settings::WebsiteSettings;
    use forecourt_app::domain::settings::SettingsServiceError;

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("settings").patch(handler))
    }

    #[tokio::test]
    async fn test_update_forwards_only_supplied_fields() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .settings
            .expect_update_settings()
            .once()
            .withf(|patch| {
                patch.maintenance_mode == Some(true)
                    && patch.hero.as_ref().and_then(|hero| hero.title.as_deref())
                        == Some("Now open")
                    && patch.hero.as_ref().is_some_and(|hero| hero.subtitle.is_none())
                    && patch.stats.is_none()
            })
            .return_once(|_| {
                let mut settings = WebsiteSettings::default();
                settings.hero.title = "Now open".to_string();
                settings.maintenance_mode = true;

                Ok(settings)
            });

        let mut res = TestClient::patch("http://example.com/settings")
            .json(&json!({ "hero": { "title": "Now open" }, "maintenanceMode": true }))
            .send(&make_service(mocks))
            .await;

        let body: SettingsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.hero.title, "Now open");
        assert!(body.maintenance_mode);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_offline_returns_503() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .settings
            .expect_update_settings()
            .once()
            .return_once(|_| Err(SettingsServiceError::Offline));

        let res = TestClient::patch("http://example.com/settings")
            .json(&json!({ "maintenanceMode": false }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }
}

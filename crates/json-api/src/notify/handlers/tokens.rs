//! List Device Tokens Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    notify::{errors::into_status_error, models::DeviceTokensResponse},
};

/// List Device Tokens Handler
///
/// Devices currently registered for push notifications. Expired tokens are purged first.
#[endpoint(
    tags("notify"),
    summary = "List Device Tokens",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Registered devices"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "notify.tokens", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DeviceTokensResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let tokens = state
        .app
        .notifier
        .list_tokens()
        .await
        .map_err(into_status_error)?;

    Ok(Json(DeviceTokensResponse {
        tokens: tokens.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use forecourt_app::notifications::DeviceToken;

    use crate::test_helpers::Mocks;

    use super::*;

    #[tokio::test]
    async fn test_lists_registered_tokens() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.notifier.expect_list_tokens().once().return_once(|| {
            Ok(vec![
                DeviceToken {
                    token: "tablet".to_string(),
                    registered_at: Timestamp::UNIX_EPOCH,
                },
                DeviceToken {
                    token: "phone".to_string(),
                    registered_at: Timestamp::UNIX_EPOCH,
                },
            ])
        });

        let body: DeviceTokensResponse = TestClient::get("http://example.com/notify/admin/tokens")
            .send(&mocks.service(Router::with_path("notify/admin/tokens").get(handler)))
            .await
            .take_json()
            .await?;

        let tokens: Vec<&str> = body.tokens.iter().map(|device| device.token.as_str()).collect();

        assert_eq!(tokens, ["tablet", "phone"]);

        Ok(())
    }
}

//! Create Inquiry Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::Instrument;

use crate::{
    extensions::*,
    inquiries::{
        errors::into_status_error,
        models::{InquiryRequest, InquiryResponse},
    },
    observability::observe_dispatch,
};

/// Create Inquiry Handler
///
/// Stores a pending inquiry, then alerts the admin in the background. Notification failures
/// never affect the response.
#[endpoint(
    tags("inquiries"),
    summary = "Submit Inquiry",
    responses(
        (status_code = StatusCode::CREATED, description = "Inquiry stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid inquiry payload"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "inquiries.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<InquiryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<InquiryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let inquiry = state
        .app
        .inquiries
        .create_inquiry(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(inquiry_id = %inquiry.id, "stored inquiry");

    let notifier = state.app.notifier.clone();
    let request = inquiry.request.clone();

    tokio::spawn(
        async move {
            let report = notifier.notify_inquiry(&request).await;

            observe_dispatch("inquiry", &report);
        }
        .in_current_span(),
    );

    res.add_header(LOCATION, format!("/api/inquiries/{}", inquiry.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(inquiry.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use forecourt::validation::ValidationErrors;
    use forecourt_app::{
        domain::inquiries::InquiriesServiceError,
        notifications::{Delivery, DispatchReport},
    };

    use crate::test_helpers::{Mocks, make_inquiry};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("inquiries").post(handler))
    }

    #[tokio::test]
    async fn test_create_inquiry_success() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .inquiries
            .expect_create_inquiry()
            .once()
            .withf(|inquiry| {
                inquiry.contact.first_name == "Sam" && inquiry.car_id.as_deref() == Some("car-1")
            })
            .return_once(|_| Ok(make_inquiry("inq-1")));

        mocks.notifier.expect_notify_inquiry().returning(|_| DispatchReport {
            email: Delivery::Skipped,
            push: Delivery::Skipped,
        });

        let mut res = TestClient::post("http://example.com/inquiries")
            .json(&json!({
                "firstName": "Sam",
                "lastName": "Lee",
                "email": "sam@example.com",
                "phone": "+44 7700 900000",
                "carId": "car-1",
                "carName": "Nissan Skyline GT-R R34",
            }))
            .send(&make_service(mocks))
            .await;

        let body: InquiryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, "inq-1");
        assert_eq!(body.kind, "car");
        assert_eq!(body.status, "pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_invalid_inquiry_returns_400_without_notifying() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.inquiries.expect_create_inquiry().once().return_once(|_| {
            let mut errors = ValidationErrors::new();
            errors.require("email", "");

            Err(InquiriesServiceError::Invalid(errors))
        });

        mocks.notifier.expect_notify_inquiry().never();

        let res = TestClient::post("http://example.com/inquiries")
            .json(&json!({ "firstName": "Sam" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_inquiry_offline_returns_503() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .inquiries
            .expect_create_inquiry()
            .once()
            .return_once(|_| Err(InquiriesServiceError::Offline));

        mocks.notifier.expect_notify_inquiry().never();

        let res = TestClient::post("http://example.com/inquiries")
            .json(&json!({ "firstName": "Sam" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }
}

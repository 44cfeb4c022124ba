//! Get Inquiry Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, models::InquiryResponse},
};

/// Get Inquiry Handler
#[endpoint(
    tags("inquiries"),
    summary = "Get Inquiry",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inquiry"),
        (status_code = StatusCode::NOT_FOUND, description = "Inquiry not found"),
    ),
)]
#[tracing::instrument(name = "inquiries.get", skip(inquiry, depot), err)]
pub(crate) async fn handler(
    inquiry: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<InquiryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let inquiry = state
        .app
        .inquiries
        .get_inquiry(&inquiry.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(inquiry.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use forecourt_app::domain::inquiries::InquiriesServiceError;

    use crate::test_helpers::{Mocks, make_inquiry};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("inquiries/{inquiry}").get(handler))
    }

    #[tokio::test]
    async fn test_get_inquiry_returns_200() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .inquiries
            .expect_get_inquiry()
            .once()
            .withf(|id| id == "inq-1")
            .return_once(|id| Ok(make_inquiry(id)));

        let res = TestClient::get("http://example.com/inquiries/inq-1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_inquiry_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .inquiries
            .expect_get_inquiry()
            .once()
            .return_once(|_| Err(InquiriesServiceError::NotFound));

        let res = TestClient::get("http://example.com/inquiries/nope")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

//! List Inquiries Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, models::InquiryResponse},
};

/// List Inquiries Handler
///
/// Every inquiry, newest first.
#[endpoint(
    tags("inquiries"),
    summary = "List Inquiries",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inquiries"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
    ),
)]
#[tracing::instrument(name = "inquiries.index", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<InquiryResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let inquiries = state
        .app
        .inquiries
        .list_inquiries()
        .await
        .map_err(into_status_error)?;

    Ok(Json(inquiries.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_inquiry};

    use super::*;

    #[tokio::test]
    async fn test_index_preserves_service_order() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .inquiries
            .expect_list_inquiries()
            .once()
            .return_once(|| Ok(vec![make_inquiry("newer"), make_inquiry("older")]));

        let body: Vec<InquiryResponse> = TestClient::get("http://example.com/inquiries")
            .send(&mocks.service(Router::with_path("inquiries").get(handler)))
            .await
            .take_json()
            .await?;

        let ids: Vec<&str> = body.iter().map(|inquiry| inquiry.id.as_str()).collect();

        assert_eq!(ids, vec!["newer", "older"]);

        Ok(())
    }
}

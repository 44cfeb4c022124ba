//! Notify Inquiry Handler

use salvo::prelude::*;

use forecourt::inquiries::NewInquiry;

use crate::{
    extensions::*, inquiries::models::InquiryRequest, notify::models::NotifyResponse,
    observability::observe_dispatch,
};

/// Notify Inquiry Handler
///
/// Emails and pushes an inquiry alert to the admin. Delivery problems are logged, never
/// reported, so any readable payload answers `{"ok": true}`.
#[endpoint(
    tags("notify"),
    summary = "Notify Inquiry",
    responses(
        (status_code = StatusCode::OK, description = "Notification attempted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unreadable payload"),
    ),
)]
#[tracing::instrument(name = "notify.inquiry", skip(req, depot, res), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<NotifyResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let inquiry: NewInquiry = match req.parse_json::<InquiryRequest>().await {
        Ok(request) => request.into(),
        Err(error) => {
            tracing::warn!(%error, "unreadable inquiry notification");

            res.status_code(StatusCode::BAD_REQUEST);

            return Ok(Json(NotifyResponse::failed(error)));
        }
    };

    let report = state.app.notifier.notify_inquiry(&inquiry).await;

    observe_dispatch("inquiry", &report);

    Ok(Json(NotifyResponse::ok()))
}

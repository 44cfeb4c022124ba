//! Update Inquiry Status Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use forecourt::inquiries::InquiryStatus;

use crate::{
    extensions::*,
    inquiries::{
        errors::into_status_error,
        models::{InquiryResponse, InquiryStatusRequest},
    },
};

/// Update Inquiry Status Handler
///
/// Any status may follow any other.
#[endpoint(
    tags("inquiries"),
    summary = "Update Inquiry Status",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inquiry updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Inquiry not found"),
    ),
)]
#[tracing::instrument(
    name = "inquiries.status",
    skip(inquiry, json, depot),
    fields(inquiry_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    inquiry: PathParam<String>,
    json: JsonBody<InquiryStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<InquiryResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = inquiry.into_inner();

    tracing::Span::current().record("inquiry_id", tracing::field::display(&id));

    let status = json
        .into_inner()
        .status
        .parse::<InquiryStatus>()
        .or_400("Invalid inquiry status")?;

    let inquiry = state
        .app
        .inquiries
        .update_inquiry_status(&id, status)
        .await
        .map_err(into_status_error)?;

    tracing::info!(inquiry_id = %id, %status, "updated inquiry status");

    Ok(Json(inquiry.into()))
}

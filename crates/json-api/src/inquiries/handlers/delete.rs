//! Delete Inquiry Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, inquiries::errors::into_status_error};

/// Delete Inquiry Handler
#[endpoint(
    tags("inquiries"),
    summary = "Delete Inquiry",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inquiry deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Inquiry not found"),
    ),
)]
#[tracing::instrument(name = "inquiries.delete", skip(inquiry, depot), err)]
pub(crate) async fn handler(
    inquiry: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = inquiry.into_inner();

    state
        .app
        .inquiries
        .delete_inquiry(&id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(inquiry_id = %id, "deleted inquiry");

    Ok(StatusCode::OK)
}

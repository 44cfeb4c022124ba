//! List Bookings Handler

use salvo::prelude::*;

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
};

/// List Bookings Handler
///
/// Every booking, newest first.
#[endpoint(
    tags("bookings"),
    summary = "List Bookings",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Bookings"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
    ),
)]
#[tracing::instrument(name = "bookings.index", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BookingResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let bookings = state
        .app
        .bookings
        .list_bookings()
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

//! Get Booking Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
};

/// Get Booking Handler
#[endpoint(
    tags("bookings"),
    summary = "Get Booking",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
    ),
)]
#[tracing::instrument(name = "bookings.get", skip(booking, depot), err)]
pub(crate) async fn handler(
    booking: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let booking = state
        .app
        .bookings
        .get_booking(&booking.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}

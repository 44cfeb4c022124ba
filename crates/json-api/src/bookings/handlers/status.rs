//! Update Booking Status Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use forecourt::bookings::BookingStatus;

use crate::{
    bookings::{
        errors::into_status_error,
        models::{BookingResponse, BookingStatusRequest},
    },
    extensions::*,
};

/// Update Booking Status Handler
///
/// Any status may follow any other.
#[endpoint(
    tags("bookings"),
    summary = "Update Booking Status",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
    ),
)]
#[tracing::instrument(
    name = "bookings.status",
    skip(booking, json, depot),
    fields(booking_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    booking: PathParam<String>,
    json: JsonBody<BookingStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = booking.into_inner();

    tracing::Span::current().record("booking_id", tracing::field::display(&id));

    let status = json
        .into_inner()
        .status
        .parse::<BookingStatus>()
        .or_400("Invalid booking status")?;

    let booking = state
        .app
        .bookings
        .update_booking_status(&id, status)
        .await
        .map_err(into_status_error)?;

    tracing::info!(booking_id = %id, %status, "updated booking status");

    Ok(Json(booking.into()))
}

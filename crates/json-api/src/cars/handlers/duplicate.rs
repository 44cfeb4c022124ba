//! Duplicate Car Handler

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use crate::{
    cars::{errors::into_status_error, models::CarResponse},
    extensions::*,
};

/// Duplicate Car Handler
///
/// Copies a car under a new id, with " (Copy)" appended to its name and a fresh slug.
#[endpoint(
    tags("cars"),
    summary = "Duplicate Car",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Copy created"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(
    name = "cars.duplicate",
    skip(car, depot, res),
    fields(car_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    car: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = car.into_inner();

    tracing::Span::current().record("car_id", tracing::field::display(&id));

    let copy = state
        .app
        .cars
        .duplicate_car(&id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(source_id = %id, car_id = %copy.id, "duplicated car");

    res.add_header(LOCATION, format!("/api/cars/{}", copy.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(copy.into()))
}

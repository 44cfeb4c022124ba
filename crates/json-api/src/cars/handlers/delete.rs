//! Delete Car Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{cars::errors::into_status_error, extensions::*};

/// Delete Car Handler
#[endpoint(
    tags("cars"),
    summary = "Delete Car",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(
    name = "cars.delete",
    skip(car, depot),
    fields(car_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    car: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = car.into_inner();

    tracing::Span::current().record("car_id", tracing::field::display(&id));

    state
        .app
        .cars
        .delete_car(&id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(car_id = %id, "deleted car");

    Ok(StatusCode::OK)
}

//! Get Car Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    cars::{errors::into_status_error, models::CarResponse},
    extensions::*,
};

/// Get Car Handler
///
/// Looks the car up by id, falling back to its store key for legacy documents.
#[endpoint(
    tags("cars"),
    summary = "Get Car",
    responses(
        (status_code = StatusCode::OK, description = "Car"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cars.get", skip(car, depot), fields(car_id = tracing::field::Empty), err)]
pub(crate) async fn handler(
    car: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = car.into_inner();

    tracing::Span::current().record("car_id", tracing::field::display(&id));

    let car = state
        .app
        .cars
        .get_car(&id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(car.into()))
}

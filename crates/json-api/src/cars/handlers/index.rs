//! List Cars Handler

use salvo::prelude::*;

use crate::{
    cars::{errors::into_status_error, models::CarResponse},
    extensions::*,
};

/// List Cars Handler
///
/// Returns every car in the inventory, including unpublished ones. An unreachable store
/// yields an empty list.
#[endpoint(
    tags("cars"),
    summary = "List Cars",
    responses(
        (status_code = StatusCode::OK, description = "Cars"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cars.index", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CarResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let cars = state
        .app
        .cars
        .list_cars()
        .await
        .map_err(into_status_error)?;

    Ok(Json(cars.into_iter().map(Into::into).collect()))
}

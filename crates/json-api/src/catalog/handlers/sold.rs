//! Sold Cars Handler

use salvo::prelude::*;

use forecourt::catalog;

use crate::{cars::errors::into_status_error, cars::models::CarResponse, extensions::*};

/// Sold Cars Handler
///
/// Published cars marked as sold, by name.
#[endpoint(tags("catalog"), summary = "Sold Cars")]
#[tracing::instrument(name = "catalog.sold", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CarResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let cars = state
        .app
        .cars
        .list_cars()
        .await
        .map_err(into_status_error)?;

    Ok(Json(catalog::sold(&cars).into_iter().map(Into::into).collect()))
}

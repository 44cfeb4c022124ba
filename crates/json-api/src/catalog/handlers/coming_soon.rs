//! Coming Soon Handler

use salvo::prelude::*;

use forecourt::catalog;

use crate::{cars::errors::into_status_error, cars::models::CarResponse, extensions::*};

/// Coming Soon Handler
///
/// Published cars flagged as coming soon, by name.
#[endpoint(tags("catalog"), summary = "Coming Soon")]
#[tracing::instrument(name = "catalog.coming_soon", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CarResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let cars = state
        .app
        .cars
        .list_cars()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        catalog::coming_soon(&cars)
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}

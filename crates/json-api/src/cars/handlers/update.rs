//! Update Car Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    cars::{
        errors::into_status_error,
        models::{CarBody, CarResponse},
    },
    extensions::*,
};

/// Update Car Handler
///
/// Replaces the car's details and regenerates its slug from the new name.
#[endpoint(
    tags("cars"),
    summary = "Update Car",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid car payload"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(
    name = "cars.update",
    skip(car, json, depot),
    fields(car_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    car: PathParam<String>,
    json: JsonBody<CarBody>,
    depot: &mut Depot,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = car.into_inner();

    tracing::Span::current().record("car_id", tracing::field::display(&id));

    let car = state
        .app
        .cars
        .update_car(&id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(car_id = %car.id, slug = %car.slug, "updated car");

    Ok(Json(car.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use forecourt_app::domain::cars::CarsServiceError;

    use crate::test_helpers::{Mocks, make_car};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("cars/{car}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_car_success() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_update_car()
            .once()
            .withf(|id, details| id == "car-1" && details.name == "Toyota Supra MK4")
            .return_once(|id, _| Ok(make_car(id, "Toyota Supra MK4")));

        let mut res = TestClient::patch("http://example.com/cars/car-1")
            .json(&json!({ "name": "Toyota Supra MK4" }))
            .send(&make_service(mocks))
            .await;

        let body: CarResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, "car-1");
        assert_eq!(body.slug, "toyota-supra-mk4");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_car_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_update_car()
            .once()
            .return_once(|_, _| Err(CarsServiceError::NotFound));

        let res = TestClient::patch("http://example.com/cars/gone")
            .json(&json!({ "name": "Anything" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

//! Create Car Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    cars::{
        errors::into_status_error,
        models::{CarBody, CarResponse},
    },
    extensions::*,
};

/// Create Car Handler
///
/// Stores a new car under a fresh id with a unique slug.
#[endpoint(
    tags("cars"),
    summary = "Create Car",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Car created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid car payload"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin secret"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "cars.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CarBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let car = state
        .app
        .cars
        .create_car(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(car_id = %car.id, slug = %car.slug, "created car");

    res.add_header(LOCATION, format!("/api/cars/{}", car.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(car.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use forecourt::validation::ValidationErrors;
    use forecourt_app::domain::cars::CarsServiceError;

    use crate::test_helpers::{Mocks, make_car};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("cars").post(handler))
    }

    #[tokio::test]
    async fn test_create_car_success() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_create_car()
            .once()
            .withf(|details| {
                details.name == "Honda NSX"
                    && details.seats == 2
                    && details.features == ["Pop-up headlights"]
            })
            .return_once(|_| Ok(make_car("car-9", "Honda NSX")));

        let mut res = TestClient::post("http://example.com/cars")
            .json(&json!({
                "name": "Honda NSX",
                "seats": 2,
                "features": ["Pop-up headlights"],
            }))
            .send(&make_service(mocks))
            .await;

        let body: CarResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/cars/car-9"));
        assert_eq!(body.slug, "honda-nsx");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_car_invalid_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.cars.expect_create_car().once().return_once(|_| {
            let mut errors = ValidationErrors::new();
            errors.require("name", "");

            Err(CarsServiceError::Invalid(errors))
        });

        let res = TestClient::post("http://example.com/cars")
            .json(&json!({ "seats": 2 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_car_offline_returns_503() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_create_car()
            .once()
            .return_once(|_| Err(CarsServiceError::Offline));

        let res = TestClient::post("http://example.com/cars")
            .json(&json!({ "name": "Honda NSX" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_car_malformed_json_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.cars.expect_create_car().never();

        let res = TestClient::post("http://example.com/cars")
            .json(&json!({ "seats": "many" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

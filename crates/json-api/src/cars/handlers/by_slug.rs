//! Get Car By Slug Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    cars::{errors::into_status_error, models::CarResponse},
    extensions::*,
};

/// Get Car By Slug Handler
///
/// Exact slug match only; ids are not consulted.
#[endpoint(
    tags("cars"),
    summary = "Get Car By Slug",
    responses(
        (status_code = StatusCode::OK, description = "Car"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cars.by_slug", skip(slug, depot), err)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let car = state
        .app
        .cars
        .get_car_by_slug(&slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(car.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use forecourt_app::domain::cars::CarsServiceError;

    use crate::test_helpers::{Mocks, make_car};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("cars/by-slug/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_by_slug_returns_car() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_get_car_by_slug()
            .once()
            .withf(|slug| slug == "mazda-rx-7")
            .return_once(|_| Ok(make_car("car-1", "Mazda RX-7")));

        let mut res = TestClient::get("http://example.com/cars/by-slug/mazda-rx-7")
            .send(&make_service(mocks))
            .await;

        let body: CarResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.slug, "mazda-rx-7");

        Ok(())
    }

    #[tokio::test]
    async fn test_by_slug_unknown_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_get_car_by_slug()
            .once()
            .return_once(|_| Err(CarsServiceError::NotFound));

        mocks.cars.expect_get_car().never();

        let res = TestClient::get("http://example.com/cars/by-slug/car-1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

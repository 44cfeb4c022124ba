//! App Router

use salvo::Router;

use crate::{admin, bookings, cars, catalog, inquiries, notify, settings, uploads};

/// Every API route. Showroom reads and customer submissions are public, the rest sits
/// behind the admin secret.
pub fn app_router() -> Router {
    Router::new()
        .push(public_router())
        .push(Router::new().hoop(admin::handler).push(admin_router()))
}

fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cars")
                .get(cars::index::handler)
                .push(Router::with_path("by-slug/{slug}").get(cars::by_slug::handler))
                .push(Router::with_path("{car}").get(cars::get::handler)),
        )
        .push(
            Router::with_path("catalog")
                .get(catalog::index::handler)
                .push(Router::with_path("coming-soon").get(catalog::coming_soon::handler))
                .push(Router::with_path("sold").get(catalog::sold::handler)),
        )
        .push(Router::with_path("inquiries").post(inquiries::create::handler))
        .push(Router::with_path("bookings").post(bookings::create::handler))
        .push(Router::with_path("settings").get(settings::get::handler))
        .push(
            Router::with_path("notify")
                .push(Router::with_path("inquiry").post(notify::inquiry::handler))
                .push(Router::with_path("booking").post(notify::booking::handler)),
        )
}

fn admin_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cars").post(cars::create::handler).push(
                Router::with_path("{car}")
                    .patch(cars::update::handler)
                    .delete(cars::delete::handler)
                    .push(Router::with_path("duplicate").post(cars::duplicate::handler)),
            ),
        )
        .push(
            Router::with_path("inquiries")
                .get(inquiries::index::handler)
                .push(
                    Router::with_path("{inquiry}")
                        .get(inquiries::get::handler)
                        .delete(inquiries::delete::handler)
                        .push(Router::with_path("status").patch(inquiries::status::handler)),
                ),
        )
        .push(
            Router::with_path("bookings")
                .get(bookings::index::handler)
                .push(
                    Router::with_path("{booking}")
                        .get(bookings::get::handler)
                        .delete(bookings::delete::handler)
                        .push(Router::with_path("status").patch(bookings::status::handler)),
                ),
        )
        .push(Router::with_path("settings").patch(settings::update::handler))
        .push(
            Router::with_path("upload")
                .push(Router::with_path("image").post(uploads::image::handler))
                .push(Router::with_path("images").post(uploads::images::handler)),
        )
        .push(
            Router::with_path("notify")
                .push(Router::with_path("register-token").post(notify::register_token::handler))
                .push(
                    Router::with_path("admin")
                        .post(notify::broadcast::handler)
                        .push(Router::with_path("tokens").get(notify::tokens::handler)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        admin::ADMIN_SECRET_HEADER,
        test_helpers::{Mocks, TEST_ADMIN_SECRET, make_car},
    };

    use super::*;

    #[tokio::test]
    async fn test_public_reads_need_no_secret() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_get_car()
            .once()
            .withf(|id| id == "car-1")
            .return_once(|_| Ok(make_car("car-1", "Nissan Skyline GT-R R34")));

        let mut res = TestClient::get("http://example.com/cars/car-1")
            .send(&mocks.service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("Skyline"));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_writes_require_the_secret() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.cars.expect_delete_car().never();

        let res = TestClient::delete("http://example.com/cars/car-1")
            .send(&mocks.service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_writes_pass_with_the_secret() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .cars
            .expect_delete_car()
            .once()
            .withf(|id| id == "car-1")
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/cars/car-1")
            .add_header(ADMIN_SECRET_HEADER, TEST_ADMIN_SECRET, true)
            .send(&mocks.service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_listing_inquiries_is_admin_only() -> TestResult {
        let res = TestClient::get("http://example.com/inquiries")
            .send(&Mocks::default().service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_settings_patch_is_admin_only() -> TestResult {
        let res = TestClient::patch("http://example.com/settings")
            .json(&json!({ "hero": { "title": "Hijacked" } }))
            .send(&Mocks::default().service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_device_tokens_are_admin_only() -> TestResult {
        let res = TestClient::get("http://example.com/notify/admin/tokens")
            .send(&Mocks::default().service(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}

//! Create Booking Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::Instrument;

use crate::{
    bookings::{
        errors::into_status_error,
        models::{BookingRequest, BookingResponse},
    },
    extensions::*,
    observability::observe_dispatch,
};

/// Create Booking Handler
///
/// Stores a pending viewing appointment, then alerts the admin in the background.
#[endpoint(
    tags("bookings"),
    summary = "Book Viewing",
    responses(
        (status_code = StatusCode::CREATED, description = "Booking stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid booking payload"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "bookings.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<BookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = json
        .into_inner()
        .into_new_booking()
        .or_400("Invalid booking date or time")?;

    let booking = state
        .app
        .bookings
        .create_booking(request)
        .await
        .map_err(into_status_error)?;

    tracing::info!(booking_id = %booking.id, car_id = %booking.request.car_id, "stored booking");

    let notifier = state.app.notifier.clone();
    let request = booking.request.clone();

    tokio::spawn(
        async move {
            let report = notifier.notify_booking(&request).await;

            observe_dispatch("booking", &report);
        }
        .in_current_span(),
    );

    res.add_header(LOCATION, format!("/api/bookings/{}", booking.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(booking.into()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use forecourt::validation::ValidationErrors;
    use forecourt_app::{
        domain::bookings::BookingsServiceError,
        notifications::{Delivery, DispatchReport},
    };

    use crate::test_helpers::{Mocks, make_booking};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("bookings").post(handler))
    }

    fn payload(date: &str, time: &str) -> Value {
        json!({
            "firstName": "Sam",
            "lastName": "Lee",
            "email": "sam@example.com",
            "phone": "+44 7700 900000",
            "carId": "car-1",
            "carName": "Nissan Skyline GT-R R34",
            "date": date,
            "time": time,
        })
    }

    #[tokio::test]
    async fn test_create_booking_success() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .bookings
            .expect_create_booking()
            .once()
            .withf(|booking| {
                booking.car_id == "car-1"
                    && booking.date == date(2026, 11, 2)
                    && booking.time == time(14, 30, 0, 0)
            })
            .return_once(|_| Ok(make_booking("book-1")));

        mocks.notifier.expect_notify_booking().returning(|_| DispatchReport {
            email: Delivery::Sent,
            push: Delivery::Skipped,
        });

        let mut res = TestClient::post("http://example.com/bookings")
            .json(&payload("2026-11-02", "14:30"))
            .send(&make_service(mocks))
            .await;

        let body: BookingResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/bookings/book-1"));
        assert_eq!(body.request.date, "2026-11-02");
        assert_eq!(body.request.time, "14:30");
        assert_eq!(body.status, "pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_bad_date_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.bookings.expect_create_booking().never();
        mocks.notifier.expect_notify_booking().never();

        let res = TestClient::post("http://example.com/bookings")
            .json(&payload("next tuesday", "14:30"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_without_car_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.bookings.expect_create_booking().once().return_once(|_| {
            let mut errors = ValidationErrors::new();
            errors.require("carId", "");

            Err(BookingsServiceError::Invalid(errors))
        });

        mocks.notifier.expect_notify_booking().never();

        let res = TestClient::post("http://example.com/bookings")
            .json(&payload("2026-11-02", "14:30"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! Notify Booking Handler

use salvo::prelude::*;

use forecourt::bookings::NewBooking;

use crate::{
    bookings::models::BookingRequest, extensions::*, notify::models::NotifyResponse,
    observability::observe_dispatch,
};

/// Notify Booking Handler
///
/// Emails and pushes a viewing booking alert to the admin. Delivery problems are logged,
/// never reported.
#[endpoint(
    tags("notify"),
    summary = "Notify Booking",
    responses(
        (status_code = StatusCode::OK, description = "Notification attempted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unreadable payload"),
    ),
)]
#[tracing::instrument(name = "notify.booking", skip(req, depot, res), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<NotifyResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let parsed = match req.parse_json::<BookingRequest>().await {
        Ok(request) => request.into_new_booking().map_err(|error| error.to_string()),
        Err(error) => Err(error.to_string()),
    };

    let booking: NewBooking = match parsed {
        Ok(booking) => booking,
        Err(error) => {
            tracing::warn!(%error, "unreadable booking notification");

            res.status_code(StatusCode::BAD_REQUEST);

            return Ok(Json(NotifyResponse::failed(error)));
        }
    };

    let report = state.app.notifier.notify_booking(&booking).await;

    observe_dispatch("booking", &report);

    Ok(Json(NotifyResponse::ok()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use forecourt_app::notifications::{Delivery, DispatchReport};

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("notify/booking").post(handler))
    }

    #[tokio::test]
    async fn test_notify_booking_answers_ok() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .notifier
            .expect_notify_booking()
            .once()
            .withf(|booking| booking.date == date(2026, 11, 2))
            .return_once(|_| DispatchReport {
                email: Delivery::Sent,
                push: Delivery::Sent,
            });

        let body: NotifyResponse = TestClient::post("http://example.com/notify/booking")
            .json(&json!({
                "firstName": "Sam",
                "email": "sam@example.com",
                "carId": "car-1",
                "date": "2026-11-02",
                "time": "09:15",
            }))
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        assert!(body.ok);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_time_returns_ok_false() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.notifier.expect_notify_booking().never();

        let mut res = TestClient::post("http://example.com/notify/booking")
            .json(&json!({ "carId": "car-1", "date": "2026-11-02", "time": "late" }))
            .send(&make_service(mocks))
            .await;

        let body: NotifyResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.ok);

        Ok(())
    }
}

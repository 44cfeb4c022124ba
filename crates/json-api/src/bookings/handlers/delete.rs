//! Delete Booking Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{bookings::errors::into_status_error, extensions::*};

/// Delete Booking Handler
#[endpoint(
    tags("bookings"),
    summary = "Delete Booking",
    security(("admin_secret" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Store unreachable"),
    ),
)]
#[tracing::instrument(name = "bookings.delete", skip(booking, depot), err)]
pub(crate) async fn handler(
    booking: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = booking.into_inner();

    state
        .app
        .bookings
        .delete_booking(&id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(booking_id = %id, "deleted booking");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use forecourt_app::domain::bookings::BookingsServiceError;

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("bookings/{booking}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_booking_success() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .bookings
            .expect_delete_booking()
            .once()
            .withf(|id| id == "book-1")
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/bookings/book-1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_booking_offline_returns_503() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .bookings
            .expect_delete_booking()
            .once()
            .return_once(|_| Err(BookingsServiceError::Offline));

        let res = TestClient::delete("http://example.com/bookings/book-1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }
}

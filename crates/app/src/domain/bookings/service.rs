//! Bookings service.

use std::{cmp::Reverse, sync::Arc};

use async_trait::async_trait;
use forecourt::bookings::{Booking, BookingStatus, NewBooking};
use jiff::Timestamp;
use mockall::automock;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{bookings::errors::BookingsServiceError, records::RecordRepository},
    store::{Collection, DocumentStore, soft_read},
};

#[derive(Clone)]
pub struct StoreBookingsService {
    records: RecordRepository<Booking>,
}

impl StoreBookingsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            records: RecordRepository::new(store, Collection::Bookings),
        }
    }
}

#[async_trait]
impl BookingsService for StoreBookingsService {
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, BookingsServiceError> {
        booking.validate()?;

        let booking = Booking::new(Uuid::now_v7().to_string(), booking, Timestamp::now());

        self.records.insert(&booking.id, &booking).await?;

        info!(
            booking.id = %booking.id,
            car.id = %booking.request.car_id,
            date = %booking.request.date,
            "booking created"
        );

        Ok(booking)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BookingsServiceError> {
        let mut bookings = soft_read(self.records.list().await, self.records.collection())?;

        bookings.sort_by_key(|booking| Reverse(booking.created_at));

        Ok(bookings)
    }

    async fn get_booking(&self, id: &str) -> Result<Booking, BookingsServiceError> {
        soft_read(self.records.find(id).await, self.records.collection())?
            .map(|(_, booking)| booking)
            .ok_or(BookingsServiceError::NotFound)
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, BookingsServiceError> {
        let (key, _) = self
            .records
            .find(id)
            .await?
            .ok_or(BookingsServiceError::NotFound)?;

        let booking = self.records.merge(&key, json!({ "status": status })).await?;

        info!(booking.id = %id, %status, "booking status updated");

        Ok(booking)
    }

    async fn delete_booking(&self, id: &str) -> Result<(), BookingsServiceError> {
        if !self.records.delete(id).await? {
            return Err(BookingsServiceError::NotFound);
        }

        info!(booking.id = %id, "booking deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Validates and stores a new pending booking.
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, BookingsServiceError>;

    /// Every booking, newest first. Empty when the store is offline.
    async fn list_bookings(&self) -> Result<Vec<Booking>, BookingsServiceError>;

    /// A single booking by id.
    async fn get_booking(&self, id: &str) -> Result<Booking, BookingsServiceError>;

    /// Sets a booking's status; any status may follow any other.
    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, BookingsServiceError>;

    /// Permanently removes a booking.
    async fn delete_booking(&self, id: &str) -> Result<(), BookingsServiceError>;
}

#[cfg(test)]
mod tests {
    use forecourt::contact::Contact;
    use jiff::civil::{date, time};
    use testresult::TestResult;

    use crate::store::MemoryDocumentStore;

    use super::*;

    fn new_booking(car_id: &str) -> NewBooking {
        NewBooking {
            contact: Contact {
                first_name: "Priya".to_string(),
                last_name: "Shah".to_string(),
                email: "priya@example.com".to_string(),
                phone: "+44 7700 900789".to_string(),
            },
            car_id: car_id.to_string(),
            car_name: "Nissan Skyline GT-R R34".to_string(),
            date: date(2026, 11, 14),
            time: time(10, 0, 0, 0),
            notes: None,
        }
    }

    fn service() -> StoreBookingsService {
        StoreBookingsService::new(Arc::new(MemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn create_then_list_bookings() -> TestResult {
        let service = service();

        let first = service.create_booking(new_booking("car-1")).await?;
        let second = service.create_booking(new_booking("car-2")).await?;

        let bookings = service.list_bookings().await?;

        assert_eq!(bookings.len(), 2);
        assert!(bookings.iter().all(|booking| booking.status == BookingStatus::Pending));
        assert!(bookings.contains(&first));
        assert!(bookings.contains(&second));

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_requires_a_car() {
        let result = service().create_booking(new_booking("")).await;

        assert!(matches!(result, Err(BookingsServiceError::Invalid(_))));
    }

    #[tokio::test]
    async fn update_status_and_delete() -> TestResult {
        let service = service();

        let booking = service.create_booking(new_booking("car-1")).await?;
        let confirmed = service
            .update_booking_status(&booking.id, BookingStatus::Confirmed)
            .await?;

        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert_eq!(confirmed.request.date, booking.request.date);

        service.delete_booking(&booking.id).await?;

        assert!(matches!(
            service.get_booking(&booking.id).await,
            Err(BookingsServiceError::NotFound)
        ));
        assert!(matches!(
            service
                .update_booking_status(&booking.id, BookingStatus::Cancelled)
                .await,
            Err(BookingsServiceError::NotFound)
        ));

        Ok(())
    }
}

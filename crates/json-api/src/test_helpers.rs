//! Test helpers.

use std::sync::Arc;

use jiff::{
    Timestamp,
    civil::{date, time},
};
use salvo::{affix_state::inject, prelude::*};

use forecourt::{
    bookings::{Booking, NewBooking},
    cars::{Car, CarDetails},
    contact::Contact,
    inquiries::{Inquiry, NewInquiry},
};
use forecourt_app::{
    context::AppContext,
    domain::{
        bookings::MockBookingsService, cars::MockCarsService, inquiries::MockInquiriesService,
        settings::MockSettingsService,
    },
    notifications::MockNotifier,
    uploads::MockUploadService,
};

use crate::state::State;

pub(crate) const TEST_ADMIN_SECRET: &str = "test-admin-secret";

/// One mock per service. Mocks without expectations panic when called.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) cars: MockCarsService,
    pub(crate) inquiries: MockInquiriesService,
    pub(crate) bookings: MockBookingsService,
    pub(crate) settings: MockSettingsService,
    pub(crate) notifier: MockNotifier,
    pub(crate) uploads: MockUploadService,
}

impl Mocks {
    pub(crate) fn into_state(self, admin_secret: Option<&str>) -> Arc<State> {
        let app = AppContext {
            cars: Arc::new(self.cars),
            inquiries: Arc::new(self.inquiries),
            bookings: Arc::new(self.bookings),
            settings: Arc::new(self.settings),
            notifier: Arc::new(self.notifier),
            uploads: Arc::new(self.uploads),
        };

        State::from_app_context(app, admin_secret.map(str::to_string))
    }

    pub(crate) fn service(self, route: Router) -> Service {
        self.service_with_secret(Some(TEST_ADMIN_SECRET), route)
    }

    pub(crate) fn service_with_secret(self, admin_secret: Option<&str>, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state(admin_secret)))
                .push(route),
        )
    }
}

pub(crate) fn make_car(id: &str, name: &str) -> Car {
    let mut car = Car::new(
        id,
        CarDetails {
            name: name.to_string(),
            category: "Sports".to_string(),
            seats: 4,
            transmission: "Manual".to_string(),
            year: Some(1999),
            ..CarDetails::default()
        },
    );

    car.created_at = Some(Timestamp::UNIX_EPOCH);
    car.updated_at = Some(Timestamp::UNIX_EPOCH);

    car
}

pub(crate) fn make_contact() -> Contact {
    Contact {
        first_name: "Sam".to_string(),
        last_name: "Lee".to_string(),
        email: "sam@example.com".to_string(),
        phone: "+44 7700 900000".to_string(),
    }
}

pub(crate) fn make_inquiry(id: &str) -> Inquiry {
    Inquiry::new(
        id,
        NewInquiry {
            contact: make_contact(),
            car_id: Some("car-1".to_string()),
            car_name: Some("Nissan Skyline GT-R R34".to_string()),
            message: Some("Is it still available?".to_string()),
        },
        Timestamp::UNIX_EPOCH,
    )
}

pub(crate) fn make_booking(id: &str) -> Booking {
    Booking::new(
        id,
        NewBooking {
            contact: make_contact(),
            car_id: "car-1".to_string(),
            car_name: "Nissan Skyline GT-R R34".to_string(),
            date: date(2026, 11, 2),
            time: time(14, 30, 0, 0),
            notes: None,
        },
        Timestamp::UNIX_EPOCH,
    )
}

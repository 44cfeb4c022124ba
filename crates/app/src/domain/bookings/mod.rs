//! Bookings

pub mod errors;
pub mod service;

pub use errors::BookingsServiceError;
pub use service::*;

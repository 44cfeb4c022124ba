//! Forecourt Domain Concerns

pub mod bookings;
pub mod cars;
pub mod inquiries;
mod records;
pub mod settings;

/// User-facing message for writes attempted while the document store is unreachable.
pub const OFFLINE_MESSAGE: &str = "You appear to be offline. Check your connection and try again.";

//! Forecourt
//!
//! Forecourt is the domain core of a vehicle import business: the car inventory, inquiries,
//! inspection bookings, editable site copy, and the catalog that filters, sorts and pages
//! the inventory for visitors.

pub mod bookings;
pub mod cars;
pub mod catalog;
pub mod contact;
pub mod fixtures;
pub mod inquiries;
pub mod prelude;
pub mod settings;
pub mod slug;
pub mod validation;

//! Forecourt application services: the document store, domain services, notifications
//! and uploads shared by the HTTP API and the admin CLI.

pub mod context;
pub mod database;
pub mod domain;
pub mod notifications;
pub mod store;
pub mod uploads;

#[cfg(test)]
mod test;

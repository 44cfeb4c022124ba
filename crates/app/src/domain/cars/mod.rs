//! Cars

pub mod errors;
mod repository;
pub mod service;

pub use errors::CarsServiceError;
pub use service::*;

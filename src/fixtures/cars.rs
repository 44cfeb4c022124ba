//! Cars Fixtures

use serde::Deserialize;

use crate::cars::{Car, CarDetails};

/// Wrapper for cars in YAML
#[derive(Debug, Deserialize)]
pub struct CarsFixture {
    /// Cars in showroom order
    pub cars: Vec<CarFixture>,
}

/// A car entry; `key` becomes both the car id and its store key
#[derive(Debug, Deserialize)]
pub struct CarFixture {
    /// Fixture key
    pub key: String,

    /// Car attributes, written inline
    #[serde(flatten)]
    pub details: CarDetails,
}

impl From<CarFixture> for Car {
    fn from(fixture: CarFixture) -> Self {
        Car::new(fixture.key, fixture.details)
    }
}

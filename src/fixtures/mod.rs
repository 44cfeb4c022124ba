//! Fixtures
//!
//! Sample inventories described in YAML, used to seed a store and to exercise the catalog.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{cars::Car, fixtures::cars::CarsFixture};

pub mod cars;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two cars share a key
    #[error("Duplicate car key: {0}")]
    DuplicateKey(String),

    /// A car failed validation
    #[error("Invalid car {key}: {message}")]
    InvalidCar {
        /// Fixture key of the car
        key: String,

        /// Validation failure
        message: String,
    },

    /// Car not found
    #[error("Car not found: {0}")]
    CarNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded cars, in file order
    cars: Vec<Car>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            cars: Vec::new(),
        }
    }

    /// Load cars from `cars/<name>.yml` under the base path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a key repeats, or a car is invalid.
    pub fn load_cars(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("cars").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CarsFixture = serde_norway::from_str(&contents)?;

        let mut seen: FxHashSet<String> = self.cars.iter().map(|car| car.id.clone()).collect();

        for car_fixture in fixture.cars {
            if !seen.insert(car_fixture.key.clone()) {
                return Err(FixtureError::DuplicateKey(car_fixture.key));
            }

            car_fixture
                .details
                .validate()
                .map_err(|errors| FixtureError::InvalidCar {
                    key: car_fixture.key.clone(),
                    message: errors.to_string(),
                })?;

            self.cars.push(car_fixture.into());
        }

        Ok(self)
    }

    /// Load a complete fixture set by name
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_cars(name)?;

        Ok(fixture)
    }

    /// Get a car by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the car is not found.
    pub fn car(&self, key: &str) -> Result<&Car, FixtureError> {
        self.cars
            .iter()
            .find(|car| car.id == key)
            .ok_or_else(|| FixtureError::CarNotFound(key.to_string()))
    }

    /// Loaded cars
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Take ownership of the loaded cars
    pub fn into_cars(self) -> Vec<Car> {
        self.cars
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

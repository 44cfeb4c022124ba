//! Bookings
//!
//! A scheduled inspection appointment for a car.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use jiff::{
    Timestamp,
    civil::{Date, Time},
};
use serde::{Deserialize, Serialize};

use crate::{contact::Contact, inquiries::UnknownStatus, validation::ValidationErrors};

/// Booking lifecycle status. Transitions are unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Requested, awaiting confirmation.
    #[default]
    Pending,

    /// Confirmed with the requester.
    Confirmed,

    /// The inspection took place.
    Completed,

    /// Cancelled by either side.
    Cancelled,
}

impl BookingStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Booking as submitted by the public form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Requester.
    #[serde(flatten)]
    pub contact: Contact,

    /// Car to inspect, copied at submission time.
    #[serde(default)]
    pub car_id: String,

    /// Car display name, copied at submission time.
    #[serde(default)]
    pub car_name: String,

    /// Requested day.
    pub date: Date,

    /// Requested time of day.
    pub time: Time,

    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewBooking {
    /// Check the car reference and contact fields.
    ///
    /// # Errors
    ///
    /// Returns the invalid fields.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("carId", &self.car_id);
        self.contact.check(&mut errors);

        errors.into_result()
    }
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Generated identifier.
    pub id: String,

    /// Submitted fields.
    #[serde(flatten)]
    pub request: NewBooking,

    /// Scheduling status.
    #[serde(default)]
    pub status: BookingStatus,

    /// Submission time.
    pub created_at: Timestamp,
}

impl Booking {
    /// A freshly submitted, pending booking.
    #[must_use]
    pub fn new(id: impl Into<String>, request: NewBooking, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            request,
            status: BookingStatus::Pending,
            created_at,
        }
    }
}

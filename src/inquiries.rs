//! Inquiries
//!
//! A request to be contacted, either about a specific car, in general, or to have the
//! business source a vehicle on the requester's behalf (a "concierge" request).

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{contact::Contact, validation::ValidationErrors};

/// Car name recorded on concierge sourcing requests, which carry no car reference.
pub const CONCIERGE_CAR_NAME: &str = "Concierge Sourcing Request";

/// Inquiry lifecycle status. Transitions are unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Not yet handled.
    #[default]
    Pending,

    /// The requester has been contacted.
    Contacted,

    /// The request was fulfilled.
    Fulfilled,

    /// The request was cancelled.
    Cancelled,
}

impl InquiryStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Contacted,
        Self::Fulfilled,
        Self::Cancelled,
    ];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Fulfilled => "fulfilled",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for InquiryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// What an inquiry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    /// About a listed car.
    Car,

    /// A general question.
    General,

    /// A request to source a car not in the inventory.
    Concierge,
}

/// Inquiry as submitted by the public form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    /// Requester.
    #[serde(flatten)]
    pub contact: Contact,

    /// Referenced car id, copied at submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_id: Option<String>,

    /// Referenced car name, or [`CONCIERGE_CAR_NAME`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,

    /// Free-text message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewInquiry {
    /// Check required contact fields.
    ///
    /// # Errors
    ///
    /// Returns the invalid fields.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        self.contact.check(&mut errors);

        errors.into_result()
    }

    /// Classify by car reference: a car id wins, then the concierge sentinel name.
    #[must_use]
    pub fn kind(&self) -> InquiryKind {
        if self.car_id.as_deref().is_some_and(|id| !id.is_empty()) {
            InquiryKind::Car
        } else if self.car_name.as_deref() == Some(CONCIERGE_CAR_NAME) {
            InquiryKind::Concierge
        } else {
            InquiryKind::General
        }
    }
}

/// A stored inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Generated identifier.
    pub id: String,

    /// Submitted fields.
    #[serde(flatten)]
    pub request: NewInquiry,

    /// Handling status.
    #[serde(default)]
    pub status: InquiryStatus,

    /// Submission time.
    pub created_at: Timestamp,
}

impl Inquiry {
    /// A freshly submitted, pending inquiry.
    #[must_use]
    pub fn new(id: impl Into<String>, request: NewInquiry, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            request,
            status: InquiryStatus::Pending,
            created_at,
        }
    }

    /// Classify the inquiry by its car reference.
    #[must_use]
    pub fn kind(&self) -> InquiryKind {
        self.request.kind()
    }
}

//! Requester contact details shared by inquiries and bookings.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, is_plausible_email};

/// Who to get back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Given name.
    #[serde(default)]
    pub first_name: String,

    /// Family name.
    #[serde(default)]
    pub last_name: String,

    /// Email address.
    #[serde(default)]
    pub email: String,

    /// Phone number, free text.
    #[serde(default)]
    pub phone: String,
}

impl Contact {
    /// "First Last", skipping blank parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Record missing or malformed contact fields.
    pub fn check(&self, errors: &mut ValidationErrors) {
        errors.require("firstName", &self.first_name);
        errors.require("lastName", &self.last_name);
        errors.require("phone", &self.phone);

        if self.email.trim().is_empty() {
            errors.push("email", "is required");
        } else if !is_plausible_email(&self.email) {
            errors.push("email", "must be a valid email address");
        }
    }
}

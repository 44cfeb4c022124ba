//! Cars
//!
//! The inventory document. Stored documents come from several generations of the admin
//! form, so decoding is lenient: every list-valued field falls back to an empty list when
//! it is missing, `null` or not an array, and non-string entries are dropped.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{slug::slugify, validation::ValidationErrors};

/// Suffix appended to the name of a duplicated car.
pub const COPY_SUFFIX: &str = " (Copy)";

/// A car in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Logical identifier. New documents always use their store key.
    #[serde(default)]
    pub id: String,

    /// URL slug derived from the name.
    #[serde(default)]
    pub slug: String,

    /// Editable car attributes.
    #[serde(flatten)]
    pub details: CarDetails,

    /// Creation time, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// Last update time, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Car {
    /// Build a car from admin-supplied details, deriving the slug from the name.
    #[must_use]
    pub fn new(id: impl Into<String>, details: CarDetails) -> Self {
        Self {
            id: id.into(),
            slug: slugify(&details.name),
            details,
            created_at: None,
            updated_at: None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.details.name
    }

    /// Whether the car may appear anywhere on the public site.
    ///
    /// Only an explicit `published: false` hides a car; documents without the flag are public.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.details.published != Some(false)
    }

    /// Whether the car is announced but not yet available.
    #[must_use]
    pub fn is_coming_soon(&self) -> bool {
        self.details.is_coming_soon == Some(true)
    }

    /// Whether the car has been sold.
    #[must_use]
    pub fn is_sold(&self) -> bool {
        self.details.is_sold == Some(true)
    }

    /// Copy of this car under a new id with `" (Copy)"` appended to the name.
    ///
    /// The slug is left as derived from the new name; callers add a collision suffix.
    #[must_use]
    pub fn duplicate(&self, id: impl Into<String>) -> Self {
        let mut details = self.details.clone();

        details.name = format!("{}{COPY_SUFFIX}", details.name);

        Self::new(id, details)
    }
}

/// Editable attributes of a car, as submitted by the admin form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetails {
    /// Display name, e.g. "Nissan Skyline GT-R R34".
    #[serde(default)]
    pub name: String,

    /// Category such as "Sports" or "SUV".
    #[serde(default)]
    pub category: String,

    /// Rich-text description.
    #[serde(default)]
    pub description: String,

    /// Cover image URL.
    #[serde(default)]
    pub image: String,

    /// Additional image URLs, in display order.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub images: Vec<String>,

    /// Seat count.
    #[serde(default)]
    pub seats: u32,

    /// Door count.
    #[serde(default)]
    pub doors: u32,

    /// Luggage capacity in bags.
    #[serde(default)]
    pub luggage: u32,

    /// Model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// Transmission, free text ("Automatic", "Manual", ...).
    #[serde(default)]
    pub transmission: String,

    /// Fuel type, free text.
    #[serde(default)]
    pub fuel_type: String,

    /// Drivetrain, free text ("AWD", "RWD", ...).
    #[serde(default)]
    pub drivetrain: String,

    /// Has satellite navigation.
    #[serde(default)]
    pub gps: bool,

    /// Has Bluetooth audio.
    #[serde(default)]
    pub bluetooth: bool,

    /// Has air conditioning.
    #[serde(default)]
    pub air_conditioning: bool,

    /// Has USB ports.
    #[serde(default)]
    pub usb: bool,

    /// Announced but not yet available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_coming_soon: Option<bool>,

    /// Already sold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sold: Option<bool>,

    /// Publication flag; absent means published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Asking price, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Odometer reading, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<String>,

    /// Engine description, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Power output, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,

    /// Highlighted features.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub features: Vec<String>,

    /// Aftermarket enhancements.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub enhancements: Vec<String>,

    /// Marketing badges.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub badges: Vec<String>,

    /// Import timeline step titles.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub timeline_titles: Vec<String>,

    /// Import timeline step descriptions, parallel to `timeline_titles`.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub timeline_descriptions: Vec<String>,

    /// Verified auction dossier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dossier: Option<Dossier>,
}

impl CarDetails {
    /// Check the fields the admin form requires.
    ///
    /// # Errors
    ///
    /// Returns the invalid fields.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("name", &self.name);

        if !self.name.trim().is_empty() && slugify(&self.name).is_empty() {
            errors.push("name", "must contain at least one letter or digit");
        }

        errors.into_result()
    }

    /// Timeline steps as (title, description) pairs; a missing description is empty.
    pub fn timeline(&self) -> impl Iterator<Item = (&str, &str)> {
        self.timeline_titles.iter().enumerate().map(|(index, title)| {
            let description = self
                .timeline_descriptions
                .get(index)
                .map_or("", String::as_str);

            (title.as_str(), description)
        })
    }
}

/// Auction verification notes attached to a car.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dossier {
    /// Auction sheet grade, e.g. "4.5".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_grade: Option<String>,

    /// Mileage verified against service records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_mileage: Option<String>,

    /// Accident history summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident_history: Option<String>,

    /// Narrative notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(strings_from_value(value))
}

/// Keep the string entries of a JSON array; anything else becomes an empty list.
#[must_use]
pub fn strings_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

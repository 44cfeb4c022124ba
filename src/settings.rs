//! Website Settings
//!
//! All editable site copy lives in a single document. Reads overlay the stored document
//! on top of [`WebsiteSettings::default`], so a fresh store renders a complete site; writes
//! are merges, so fields the admin form does not send are preserved.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store key of the settings singleton.
pub const SETTINGS_KEY: &str = "website";

/// Editable site copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebsiteSettings {
    /// Landing page hero block.
    pub hero: Hero,

    /// Headline figures shown under the hero.
    pub stats: Vec<Stat>,

    /// Customer quotes.
    pub testimonials: Vec<Testimonial>,

    /// Public contact details.
    pub contact: ContactInfo,

    /// Terms and conditions, as Markdown.
    pub terms_and_conditions: String,

    /// Whether the public site shows a maintenance page.
    pub maintenance_mode: bool,
}

/// Landing page hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    /// Main heading.
    pub title: String,

    /// Supporting line.
    pub subtitle: String,

    /// Call-to-action button label.
    pub cta_label: String,

    /// Background image URL.
    pub image: String,
}

/// A headline figure, e.g. "250+" / "Cars imported".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    /// Displayed figure.
    pub value: String,

    /// Caption.
    pub label: String,
}

/// A customer quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    /// Customer name.
    pub name: String,

    /// Customer location.
    pub location: String,

    /// The quote.
    pub quote: String,

    /// Star rating out of five.
    pub rating: u8,
}

/// Public contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    /// Enquiries mailbox.
    pub email: String,

    /// Phone number.
    pub phone: String,

    /// WhatsApp number.
    pub whatsapp: String,

    /// Showroom address.
    pub address: String,

    /// Opening hours.
    pub opening_hours: String,
}

impl Default for WebsiteSettings {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            stats: vec![
                Stat {
                    value: "250+".to_string(),
                    label: "Cars imported".to_string(),
                },
                Stat {
                    value: "98%".to_string(),
                    label: "Happy clients".to_string(),
                },
                Stat {
                    value: "12".to_string(),
                    label: "Years of experience".to_string(),
                },
            ],
            testimonials: Vec::new(),
            contact: ContactInfo::default(),
            terms_and_conditions: DEFAULT_TERMS.to_string(),
            maintenance_mode: false,
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Your next car, imported with confidence".to_string(),
            subtitle: "Hand-picked vehicles from Japanese auctions, verified and delivered to your door."
                .to_string(),
            cta_label: "Browse the collection".to_string(),
            image: String::new(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@example.com".to_string(),
            phone: String::new(),
            whatsapp: String::new(),
            address: String::new(),
            opening_hours: "Mon-Fri 9:00-18:00".to_string(),
        }
    }
}

const DEFAULT_TERMS: &str = "# Terms and Conditions\n\nAll vehicles are sold subject to inspection. Prices exclude import duties unless stated otherwise.\n";

impl WebsiteSettings {
    /// Overlay a stored settings document on the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when a stored field has the wrong shape.
    pub fn from_stored(stored: Option<Value>) -> Result<Self, serde_json::Error> {
        let Some(stored) = stored else {
            return Ok(Self::default());
        };

        let mut merged = serde_json::to_value(Self::default())?;

        merge_patch(&mut merged, stored);

        serde_json::from_value(merged)
    }
}

/// Partial settings update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// Replacement hero fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroPatch>,

    /// Replacement stats list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,

    /// Replacement testimonials list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,

    /// Replacement contact fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfoPatch>,

    /// Replacement terms Markdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<String>,

    /// Maintenance mode toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
}

/// Partial hero update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPatch {
    /// New `title`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New `subtitle`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// New `cta_label`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// New `image`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial contact update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoPatch {
    /// New `email`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New `phone`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New `whatsapp`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    /// New `address`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New `opening_hours`, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
}

impl SettingsPatch {
    /// The patch as a JSON object holding only the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn into_object(self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(object) => Ok(object),
            _ => Ok(Map::new()),
        }
    }
}

/// Recursively merge `patch` into `target`.
///
/// Objects merge key by key; any other value, arrays included, replaces the target.
/// A `null` counts as absent and leaves the target untouched.
pub fn merge_patch(target: &mut Value, patch: Value) {
    match (target, patch) {
        (_, Value::Null) => {}
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => merge_patch(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

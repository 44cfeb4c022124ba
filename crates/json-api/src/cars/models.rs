//! Car Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt::cars::{Car, CarDetails, Dossier};

/// Car attributes as edited in the admin form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CarBody {
    /// Display name
    pub name: String,

    /// Category such as "Sports" or "SUV"
    pub category: String,

    pub description: String,

    /// Cover image URL
    pub image: String,

    /// Gallery image URLs, in display order
    pub images: Vec<String>,

    pub seats: u32,
    pub doors: u32,

    /// Luggage capacity in bags
    pub luggage: u32,

    /// Model year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    pub transmission: String,
    pub fuel_type: String,
    pub drivetrain: String,

    pub gps: bool,
    pub bluetooth: bool,
    pub air_conditioning: bool,
    pub usb: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_coming_soon: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sold: Option<bool>,

    /// Hidden from the public site when `false`; absent means published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Display price, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,

    pub features: Vec<String>,
    pub enhancements: Vec<String>,
    pub badges: Vec<String>,

    /// Timeline step titles, paired by position with `timelineDescriptions`
    pub timeline_titles: Vec<String>,
    pub timeline_descriptions: Vec<String>,

    /// Auction verification notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dossier: Option<DossierBody>,
}

/// Auction verification notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DossierBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_grade: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_mileage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident_history: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<DossierBody> for Dossier {
    fn from(body: DossierBody) -> Self {
        Dossier {
            auction_grade: body.auction_grade,
            verified_mileage: body.verified_mileage,
            accident_history: body.accident_history,
            notes: body.notes,
        }
    }
}

impl From<Dossier> for DossierBody {
    fn from(dossier: Dossier) -> Self {
        DossierBody {
            auction_grade: dossier.auction_grade,
            verified_mileage: dossier.verified_mileage,
            accident_history: dossier.accident_history,
            notes: dossier.notes,
        }
    }
}

impl From<CarBody> for CarDetails {
    fn from(body: CarBody) -> Self {
        CarDetails {
            name: body.name,
            category: body.category,
            description: body.description,
            image: body.image,
            images: body.images,
            seats: body.seats,
            doors: body.doors,
            luggage: body.luggage,
            year: body.year,
            transmission: body.transmission,
            fuel_type: body.fuel_type,
            drivetrain: body.drivetrain,
            gps: body.gps,
            bluetooth: body.bluetooth,
            air_conditioning: body.air_conditioning,
            usb: body.usb,
            is_coming_soon: body.is_coming_soon,
            is_sold: body.is_sold,
            published: body.published,
            price: body.price,
            mileage: body.mileage,
            engine: body.engine,
            power: body.power,
            features: body.features,
            enhancements: body.enhancements,
            badges: body.badges,
            timeline_titles: body.timeline_titles,
            timeline_descriptions: body.timeline_descriptions,
            dossier: body.dossier.map(Into::into),
        }
    }
}

impl From<CarDetails> for CarBody {
    fn from(details: CarDetails) -> Self {
        CarBody {
            name: details.name,
            category: details.category,
            description: details.description,
            image: details.image,
            images: details.images,
            seats: details.seats,
            doors: details.doors,
            luggage: details.luggage,
            year: details.year,
            transmission: details.transmission,
            fuel_type: details.fuel_type,
            drivetrain: details.drivetrain,
            gps: details.gps,
            bluetooth: details.bluetooth,
            air_conditioning: details.air_conditioning,
            usb: details.usb,
            is_coming_soon: details.is_coming_soon,
            is_sold: details.is_sold,
            published: details.published,
            price: details.price,
            mileage: details.mileage,
            engine: details.engine,
            power: details.power,
            features: details.features,
            enhancements: details.enhancements,
            badges: details.badges,
            timeline_titles: details.timeline_titles,
            timeline_descriptions: details.timeline_descriptions,
            dossier: details.dossier.map(Into::into),
        }
    }
}

/// A stored car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CarResponse {
    /// Car identifier
    pub id: String,

    /// URL slug derived from the name
    pub slug: String,

    #[serde(flatten)]
    pub details: CarBody,

    /// When the car was created, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the car was last updated, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        CarResponse {
            id: car.id,
            slug: car.slug,
            details: car.details.into(),
            created_at: car.created_at.as_ref().map(ToString::to_string),
            updated_at: car.updated_at.as_ref().map(ToString::to_string),
        }
    }
}

impl From<&Car> for CarResponse {
    fn from(car: &Car) -> Self {
        car.clone().into()
    }
}

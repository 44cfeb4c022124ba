//! Forecourt prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    bookings::{Booking, BookingStatus, NewBooking},
    cars::{Car, CarDetails, Dossier},
    catalog::{
        CatalogQuery, Facet, FacetOptions, Page, SortOrder, browse, coming_soon, sold,
        state::CatalogState,
    },
    contact::Contact,
    fixtures::{Fixture, FixtureError},
    inquiries::{CONCIERGE_CAR_NAME, Inquiry, InquiryKind, InquiryStatus, NewInquiry, UnknownStatus},
    settings::{SETTINGS_KEY, SettingsPatch, WebsiteSettings},
    slug::slugify,
    validation::{FieldError, ValidationErrors},
};

//! Booking Models

use jiff::civil::{Date, Time};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt::bookings::{Booking, NewBooking};

use crate::contact::ContactBody;

/// Viewing appointment as submitted by the public booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingRequest {
    #[serde(flatten)]
    pub contact: ContactBody,

    /// Car to view
    #[serde(default)]
    pub car_id: String,

    #[serde(default)]
    pub car_name: String,

    /// Requested day, `YYYY-MM-DD`
    pub date: String,

    /// Requested time of day, `HH:MM`
    pub time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BookingRequest {
    /// Parse the date and time fields.
    pub(crate) fn into_new_booking(self) -> Result<NewBooking, jiff::Error> {
        Ok(NewBooking {
            date: self.date.trim().parse::<Date>()?,
            time: self.time.trim().parse::<Time>()?,
            contact: self.contact.into(),
            car_id: self.car_id,
            car_name: self.car_name,
            notes: self.notes,
        })
    }
}

impl From<NewBooking> for BookingRequest {
    fn from(booking: NewBooking) -> Self {
        BookingRequest {
            contact: booking.contact.into(),
            car_id: booking.car_id,
            car_name: booking.car_name,
            date: booking.date.to_string(),
            time: clock_time(booking.time),
            notes: booking.notes,
        }
    }
}

/// `HH:MM`, with seconds only when the booking carries them.
fn clock_time(time: Time) -> String {
    if time.second() == 0 && time.subsec_nanosecond() == 0 {
        time.strftime("%H:%M").to_string()
    } else {
        time.to_string()
    }
}

/// A stored booking.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingResponse {
    pub id: String,

    #[serde(flatten)]
    pub request: BookingRequest,

    /// `pending`, `confirmed`, `completed` or `cancelled`
    pub status: String,

    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        BookingResponse {
            id: booking.id,
            request: booking.request.into(),
            status: booking.status.to_string(),
            created_at: booking.created_at.to_string(),
        }
    }
}

/// New scheduling status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingStatusRequest {
    /// `pending`, `confirmed`, `completed` or `cancelled`
    pub status: String,
}

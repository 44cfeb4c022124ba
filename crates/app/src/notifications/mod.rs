//! Notifications
//!
//! Best-effort admin alerts for new inquiries and bookings, delivered by email and by
//! push message to registered devices.

mod dispatcher;
mod mailer;
mod message;
mod push;
mod tokens;

pub use dispatcher::*;
pub use mailer::*;
pub use message::*;
pub use push::*;
pub use tokens::*;

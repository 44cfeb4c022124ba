//! Notification Handlers

pub(crate) mod booking;
pub(crate) mod broadcast;
pub(crate) mod inquiry;
pub(crate) mod register_token;
pub(crate) mod tokens;

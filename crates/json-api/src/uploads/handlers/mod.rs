//! Upload Handlers

pub(crate) mod image;
pub(crate) mod images;

//! Image Uploads

mod errors;
mod handlers;
mod models;
mod multipart;

pub(crate) use handlers::*;

//! Catalog Handlers

pub(crate) mod coming_soon;
pub(crate) mod index;
pub(crate) mod sold;

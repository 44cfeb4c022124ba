//! Car Handlers

pub(crate) mod by_slug;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod duplicate;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

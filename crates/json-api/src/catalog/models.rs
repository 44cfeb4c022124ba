//! Catalog Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt::{
    cars::Car,
    catalog::{CatalogQuery, FacetOptions, Page},
};

use crate::cars::models::CarResponse;

/// One page of the public catalog.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogPageResponse {
    /// Cars on this page
    pub cars: Vec<CarResponse>,

    /// 1-based page number, clamped into range
    pub page: usize,

    /// Page size actually applied
    pub per_page: usize,

    /// Number of pages, at least 1
    pub page_count: usize,

    /// Number of matching cars across all pages
    pub total: usize,

    /// Filters as applied, with facet casing aligned to the inventory
    pub filters: CatalogFilters,

    /// Values available for each facet dropdown
    pub options: FacetOptionsResponse,
}

impl CatalogPageResponse {
    pub(crate) fn new(page: &Page<&Car>, query: &CatalogQuery, options: FacetOptions) -> Self {
        CatalogPageResponse {
            cars: page.items.iter().copied().map(Into::into).collect(),
            page: page.page,
            per_page: page.page_size,
            page_count: page.page_count,
            total: page.total,
            filters: query.into(),
            options: options.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogFilters {
    pub search: String,

    /// Category, or "all"
    pub category: String,

    /// Transmission, or "all"
    pub transmission: String,

    /// Seat count, or "all"
    pub seats: String,

    pub sort: String,
}

impl From<&CatalogQuery> for CatalogFilters {
    fn from(query: &CatalogQuery) -> Self {
        CatalogFilters {
            search: query.search.clone(),
            category: query.category.to_string(),
            transmission: query.transmission.to_string(),
            seats: query.seats.to_string(),
            sort: query.sort.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FacetOptionsResponse {
    pub categories: Vec<String>,
    pub transmissions: Vec<String>,
    pub seats: Vec<String>,
}

impl From<FacetOptions> for FacetOptionsResponse {
    fn from(options: FacetOptions) -> Self {
        FacetOptionsResponse {
            categories: options.categories,
            transmissions: options.transmissions,
            seats: options.seats,
        }
    }
}

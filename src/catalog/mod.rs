//! Catalog
//!
//! Filter, sort and paginate the full car list. Every function here is pure: the caller
//! loads the inventory once and derives each page from it.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cars::Car;

pub mod state;
pub mod table;

/// Page sizes the catalog offers.
pub const PAGE_SIZES: [usize; 3] = [9, 18, 36];

/// Page size used when none, or an unsupported one, is requested.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// A facet filter: either everything, or one value compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet {
    /// No filtering on this facet.
    #[default]
    All,

    /// Only cars whose facet value matches.
    Only(String),
}

impl Facet {
    /// Parse a filter value; blank and `"all"` (any case) mean no filter.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Whether a car's facet value passes this filter.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected.eq_ignore_ascii_case(value),
        }
    }

    /// Replace the active value with the casing found in `known`, when they differ only by case.
    ///
    /// Filter values seeded from query strings use arbitrary casing; aligning them with the
    /// data keeps the active option selectable in a dropdown.
    #[must_use]
    pub fn reconcile<'a>(self, known: impl IntoIterator<Item = &'a str>) -> Self {
        let Self::Only(active) = self else {
            return self;
        };

        known
            .into_iter()
            .find(|candidate| *candidate != active && candidate.eq_ignore_ascii_case(&active))
            .map_or(Self::Only(active), |candidate| {
                Self::Only(candidate.to_string())
            })
    }

    /// The active value, or `"all"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(value) => value,
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Name ascending.
    #[default]
    Recommended,

    /// Most seats first.
    SeatsDesc,

    /// Newest model year first; cars without a year last.
    YearDesc,
}

impl SortOrder {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::SeatsDesc => "seats-desc",
            Self::YearDesc => "year-desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown sort order name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "recommended" | "name-asc" => Ok(Self::Recommended),
            "seats-desc" => Ok(Self::SeatsDesc),
            "year-desc" => Ok(Self::YearDesc),
            _ => Err(UnknownSortOrder(value.to_string())),
        }
    }
}

/// Filter and sort criteria for the main catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring searched in name and description.
    pub search: String,

    /// Category facet.
    pub category: Facet,

    /// Transmission facet.
    pub transmission: Facet,

    /// Seat count facet.
    pub seats: Facet,

    /// Ordering.
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Whether a visible car passes the search and facet filters.
    #[must_use]
    pub fn matches(&self, car: &Car) -> bool {
        matches_search(car, &self.search)
            && self.category.matches(&car.details.category)
            && self.transmission.matches(&car.details.transmission)
            && self.seats.matches(&car.details.seats.to_string())
    }

    /// Align facet casing with the values present in `cars`.
    #[must_use]
    pub fn reconciled(self, cars: &[Car]) -> Self {
        let options = FacetOptions::from_cars(cars);

        Self {
            category: self
                .category
                .reconcile(options.categories.iter().map(String::as_str)),
            transmission: self
                .transmission
                .reconcile(options.transmissions.iter().map(String::as_str)),
            seats: self
                .seats
                .reconcile(options.seats.iter().map(String::as_str)),
            ..self
        }
    }
}

/// Whether a car belongs in the main catalog.
///
/// Unpublished cars are hidden everywhere; coming-soon and sold cars only appear in their
/// dedicated views.
#[must_use]
pub fn is_listed(car: &Car) -> bool {
    car.is_published() && !car.is_coming_soon() && !car.is_sold()
}

/// Published cars flagged as coming soon, in name order.
#[must_use]
pub fn coming_soon(cars: &[Car]) -> Vec<&Car> {
    let mut selected: Vec<&Car> = cars
        .iter()
        .filter(|car| car.is_published() && car.is_coming_soon())
        .collect();

    sort(&mut selected, SortOrder::Recommended);

    selected
}

/// Published cars flagged as sold, in name order.
#[must_use]
pub fn sold(cars: &[Car]) -> Vec<&Car> {
    let mut selected: Vec<&Car> = cars
        .iter()
        .filter(|car| car.is_published() && car.is_sold())
        .collect();

    sort(&mut selected, SortOrder::Recommended);

    selected
}

fn matches_search(car: &Car, search: &str) -> bool {
    let needle = search.trim().to_lowercase();

    needle.is_empty()
        || car.details.name.to_lowercase().contains(&needle)
        || car.details.description.to_lowercase().contains(&needle)
}

/// Listed cars passing `query`, in input order.
#[must_use]
pub fn filter<'a>(cars: &'a [Car], query: &CatalogQuery) -> Vec<&'a Car> {
    cars.iter()
        .filter(|car| is_listed(car) && query.matches(car))
        .collect()
}

/// Sort in place. The sort is stable: ties keep their input order.
pub fn sort(cars: &mut [&Car], order: SortOrder) {
    match order {
        SortOrder::Recommended => cars.sort_by(|a, b| {
            a.details
                .name
                .to_lowercase()
                .cmp(&b.details.name.to_lowercase())
        }),
        SortOrder::SeatsDesc => cars.sort_by(|a, b| b.details.seats.cmp(&a.details.seats)),
        SortOrder::YearDesc => cars.sort_by(|a, b| b.details.year.cmp(&a.details.year)),
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// 1-based page number actually served.
    pub page: usize,

    /// Items per page.
    pub page_size: usize,

    /// Number of pages, at least one.
    pub page_count: usize,

    /// Items across all pages.
    pub total: usize,
}

/// Restrict a page size to [`PAGE_SIZES`].
#[must_use]
pub fn normalize_page_size(page_size: usize) -> usize {
    if PAGE_SIZES.contains(&page_size) {
        page_size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// Slice out a 1-based page, clamping the page number into range.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        page_count,
        total,
    }
}

/// Filter, sort and paginate in one step.
#[must_use]
pub fn browse<'a>(
    cars: &'a [Car],
    query: &CatalogQuery,
    page: usize,
    page_size: usize,
) -> Page<&'a Car> {
    let query = query.clone().reconciled(cars);
    let mut selected = filter(cars, &query);

    sort(&mut selected, query.sort);

    paginate(selected, page, normalize_page_size(page_size))
}

/// Distinct facet values among listed cars, for filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    /// Categories, sorted.
    pub categories: Vec<String>,

    /// Transmissions, sorted.
    pub transmissions: Vec<String>,

    /// Seat counts as strings, ascending numerically.
    pub seats: Vec<String>,
}

impl FacetOptions {
    /// Collect options from the listed cars; blank values are skipped.
    #[must_use]
    pub fn from_cars(cars: &[Car]) -> Self {
        let mut categories = FxHashSet::default();
        let mut transmissions = FxHashSet::default();
        let mut seats = FxHashSet::default();

        for car in cars.iter().filter(|car| is_listed(car)) {
            if !car.details.category.trim().is_empty() {
                categories.insert(car.details.category.clone());
            }

            if !car.details.transmission.trim().is_empty() {
                transmissions.insert(car.details.transmission.clone());
            }

            if car.details.seats > 0 {
                seats.insert(car.details.seats);
            }
        }

        let mut categories: Vec<String> = categories.into_iter().collect();
        let mut transmissions: Vec<String> = transmissions.into_iter().collect();
        let mut seats: Vec<u32> = seats.into_iter().collect();

        categories.sort();
        transmissions.sort();
        seats.sort_unstable();

        Self {
            categories,
            transmissions,
            seats: seats.into_iter().map(|count| count.to_string()).collect(),
        }
    }
}

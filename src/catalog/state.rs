//! Catalog browsing state: the filters, sort and page a visitor has selected.

use crate::{
    cars::Car,
    catalog::{CatalogQuery, DEFAULT_PAGE_SIZE, Facet, Page, SortOrder, browse, normalize_page_size},
};

/// Selected filters plus the current page.
///
/// Changing any filter or the page size returns to the first page; changing the sort keeps
/// the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    query: CatalogQuery,
    page: usize,
    page_size: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            query: CatalogQuery::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogState {
    /// State seeded from an existing query, on the first page.
    #[must_use]
    pub fn from_query(query: CatalogQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Current criteria.
    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Current 1-based page.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.page = 1;
    }

    /// Set the category facet.
    pub fn set_category(&mut self, category: Facet) {
        self.query.category = category;
        self.page = 1;
    }

    /// Set the transmission facet.
    pub fn set_transmission(&mut self, transmission: Facet) {
        self.query.transmission = transmission;
        self.page = 1;
    }

    /// Set the seat count facet.
    pub fn set_seats(&mut self, seats: Facet) {
        self.query.seats = seats;
        self.page = 1;
    }

    /// Set the page size; unsupported sizes fall back to the default.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = normalize_page_size(page_size);
        self.page = 1;
    }

    /// Set the ordering.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
    }

    /// Request a page; it is clamped when the state is applied.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Clear every filter and return to the first page.
    pub fn reset(&mut self) {
        *self = Self {
            page_size: self.page_size,
            ..Self::default()
        };
    }

    /// Apply the state to an inventory, adopting the clamped page and reconciled facet casing.
    pub fn apply<'a>(&mut self, cars: &'a [Car]) -> Page<&'a Car> {
        self.query = self.query.clone().reconciled(cars);

        let page = browse(cars, &self.query, self.page, self.page_size);

        self.page = page.page;

        page
    }
}

#[cfg(test)]
mod tests {
    use crate::cars::CarDetails;

    use super::*;

    fn inventory(count: usize) -> Vec<Car> {
        (0..count)
            .map(|index| {
                Car::new(
                    format!("car-{index}"),
                    CarDetails {
                        name: format!("Car {index:02}"),
                        category: "Sedan".to_string(),
                        seats: 5,
                        ..CarDetails::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn filter_changes_reset_to_first_page() {
        let mut state = CatalogState::default();

        state.go_to(3);
        state.set_search("car");

        assert_eq!(state.page(), 1);

        state.go_to(2);
        state.set_category(Facet::parse("sedan"));

        assert_eq!(state.page(), 1);

        state.go_to(2);
        state.set_transmission(Facet::parse("manual"));

        assert_eq!(state.page(), 1);

        state.go_to(2);
        state.set_seats(Facet::parse("5"));

        assert_eq!(state.page(), 1);

        state.go_to(2);
        state.set_page_size(18);

        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 18);
    }

    #[test]
    fn sort_changes_keep_the_page() {
        let mut state = CatalogState::default();

        state.go_to(2);
        state.set_sort(SortOrder::YearDesc);

        assert_eq!(state.page(), 2);
    }

    #[test]
    fn apply_clamps_page_and_reconciles_facets() {
        let cars = inventory(20);
        let mut state = CatalogState::default();

        state.set_category(Facet::parse("SEDAN"));
        state.go_to(7);

        let page = state.apply(&cars);

        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(state.page(), 3);
        assert_eq!(state.query().category, Facet::Only("Sedan".to_string()));
    }

    #[test]
    fn reset_keeps_page_size() {
        let mut state = CatalogState::default();

        state.set_page_size(36);
        state.set_search("gt-r");
        state.reset();

        assert_eq!(state.query(), &CatalogQuery::default());
        assert_eq!(state.page_size(), 36);
    }
}

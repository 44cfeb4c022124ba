//! Browse Catalog Handler

use salvo::prelude::*;

use forecourt::catalog::{
    CatalogQuery, DEFAULT_PAGE_SIZE, Facet, FacetOptions, SortOrder, state::CatalogState,
};

use crate::{cars::errors::into_status_error, catalog::models::CatalogPageResponse, extensions::*};

/// Browse Catalog Handler
///
/// Filters listed cars by `search`, `category`, `transmission` and `seats`, orders them by
/// `sort` (`recommended`, `seats-desc` or `year-desc`) and returns page `page` of size
/// `perPage` (9, 18 or 36). Facet values are matched case-insensitively and `all` disables a
/// facet. Out-of-range pages are clamped.
#[endpoint(
    tags("catalog"),
    summary = "Browse Catalog",
    responses(
        (status_code = StatusCode::OK, description = "Catalog page"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort order"),
    ),
)]
#[tracing::instrument(name = "catalog.index", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CatalogPageResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let facet = |name: &str| Facet::parse(&req.query::<String>(name).unwrap_or_default());

    let query = CatalogQuery {
        search: req.query::<String>("search").unwrap_or_default(),
        category: facet("category"),
        transmission: facet("transmission"),
        seats: facet("seats"),
        sort: req
            .query::<String>("sort")
            .unwrap_or_default()
            .parse::<SortOrder>()
            .or_400("Invalid sort order")?,
    };

    let mut catalog = CatalogState::from_query(query);

    catalog.set_page_size(req.query::<usize>("perPage").unwrap_or(DEFAULT_PAGE_SIZE));
    catalog.go_to(req.query::<usize>("page").unwrap_or(1));

    let cars = state
        .app
        .cars
        .list_cars()
        .await
        .map_err(into_status_error)?;

    let page = catalog.apply(&cars);

    Ok(Json(CatalogPageResponse::new(
        &page,
        catalog.query(),
        FacetOptions::from_cars(&cars),
    )))
}

use std::{io, path::PathBuf, sync::Arc};

use clap::Args;
use forecourt::{
    catalog::{CatalogQuery, DEFAULT_PAGE_SIZE, Facet, SortOrder, browse, table::write_page},
    fixtures::Fixture,
};
use forecourt_app::{
    database,
    domain::cars::{CarsService, StoreCarsService},
    store::PgDocumentStore,
};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// PostgreSQL connection string; the fixture set is listed when omitted
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Fixture set to list without a database
    #[arg(long, default_value = "showroom")]
    fixture: String,

    /// Directory holding fixture sets
    #[arg(long, default_value = "fixtures")]
    fixtures_dir: PathBuf,

    /// Case-insensitive search in name and description
    #[arg(long, default_value = "")]
    search: String,

    /// Category, or `all`
    #[arg(long, default_value = "all")]
    category: String,

    /// Transmission, or `all`
    #[arg(long, default_value = "all")]
    transmission: String,

    /// Seat count, or `all`
    #[arg(long, default_value = "all")]
    seats: String,

    /// `recommended`, `seats-desc` or `year-desc`
    #[arg(long, default_value = "recommended")]
    sort: SortOrder,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Cars per page: 9, 18 or 36
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    per_page: usize,
}

pub(crate) async fn run(args: ListArgs) -> Result<(), String> {
    let cars = match &args.database_url {
        Some(url) => {
            let pool = database::connect(url)
                .await
                .map_err(|error| format!("failed to connect to database: {error}"))?;

            StoreCarsService::new(Arc::new(PgDocumentStore::new(pool)))
                .list_cars()
                .await
                .map_err(|error| format!("failed to list cars: {error}"))?
        }
        None => {
            let mut fixture = Fixture::with_base_path(&args.fixtures_dir);

            fixture
                .load_cars(&args.fixture)
                .map_err(|error| format!("failed to load fixture: {error}"))?;

            fixture.into_cars()
        }
    };

    let query = CatalogQuery {
        search: args.search,
        category: Facet::parse(&args.category),
        transmission: Facet::parse(&args.transmission),
        seats: Facet::parse(&args.seats),
        sort: args.sort,
    };

    let page = browse(&cars, &query, args.page, args.per_page);

    write_page(io::stdout().lock(), &page).map_err(|error| format!("failed to write table: {error}"))
}

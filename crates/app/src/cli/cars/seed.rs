use std::{path::PathBuf, sync::Arc};

use clap::Args;
use forecourt::fixtures::Fixture;
use forecourt_app::{
    database,
    domain::cars::{CarsService, CarsServiceError, StoreCarsService},
    store::PgDocumentStore,
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Fixture set name, loaded from `<fixtures-dir>/cars/<name>.yml`
    #[arg(long, default_value = "showroom")]
    fixture: String,

    /// Directory holding fixture sets
    #[arg(long, default_value = "fixtures")]
    fixtures_dir: PathBuf,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let mut fixture = Fixture::with_base_path(&args.fixtures_dir);

    fixture
        .load_cars(&args.fixture)
        .map_err(|error| format!("failed to load fixture: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to migrate database: {error}"))?;

    let service = StoreCarsService::new(Arc::new(PgDocumentStore::new(pool)));

    let mut created = 0_usize;
    let mut skipped = 0_usize;

    for car in fixture.into_cars() {
        match service.get_car_by_slug(&car.slug).await {
            Ok(_) => {
                skipped += 1;
                continue;
            }
            Err(CarsServiceError::NotFound) => {}
            Err(error) => return Err(format!("failed to look up {}: {error}", car.slug)),
        }

        let stored = service
            .create_car(car.details)
            .await
            .map_err(|error| format!("failed to create {}: {error}", car.slug))?;

        println!("created {} ({})", stored.slug, stored.id);
        created += 1;
    }

    println!("{created} created, {skipped} already present");

    Ok(())
}

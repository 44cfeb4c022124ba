//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    database,
    domain::{
        bookings::{BookingsService, StoreBookingsService},
        cars::{CarsService, StoreCarsService},
        inquiries::{InquiriesService, StoreInquiriesService},
        settings::{SettingsService, StoreSettingsService},
    },
    notifications::Notifier,
    store::{DocumentStore, MemoryDocumentStore, PgDocumentStore},
    uploads::UploadService,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to migrate database")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub cars: Arc<dyn CarsService>,
    pub inquiries: Arc<dyn InquiriesService>,
    pub bookings: Arc<dyn BookingsService>,
    pub settings: Arc<dyn SettingsService>,
    pub notifier: Arc<dyn Notifier>,
    pub uploads: Arc<dyn UploadService>,
}

impl AppContext {
    /// Build the store-backed services around an existing document store.
    #[must_use]
    pub fn new(
        store: Arc<dyn DocumentStore>,
        notifier: Arc<dyn Notifier>,
        uploads: Arc<dyn UploadService>,
    ) -> Self {
        Self {
            cars: Arc::new(StoreCarsService::new(store.clone())),
            inquiries: Arc::new(StoreInquiriesService::new(store.clone())),
            bookings: Arc::new(StoreBookingsService::new(store.clone())),
            settings: Arc::new(StoreSettingsService::new(store)),
            notifier,
            uploads,
        }
    }
}

/// Open the document store: `PostgreSQL` when a URL is given, otherwise an in-memory
/// store that is lost on exit.
///
/// # Errors
///
/// Returns an error when connecting to or migrating the database fails.
pub async fn open_store(database_url: Option<&str>) -> Result<Arc<dyn DocumentStore>, AppInitError> {
    let Some(url) = database_url.filter(|url| !url.trim().is_empty()) else {
        warn!("no database configured, using in-memory document store");

        return Ok(Arc::new(MemoryDocumentStore::new()));
    };

    let pool = database::connect(url)
        .await
        .map_err(AppInitError::Database)?;

    database::migrate(&pool)
        .await
        .map_err(AppInitError::Migrate)?;

    info!("connected to document store");

    Ok(Arc::new(PgDocumentStore::new(pool)))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::store::Collection;

    use super::*;

    #[tokio::test]
    async fn missing_database_url_falls_back_to_memory() -> TestResult {
        let store = open_store(None).await?;

        assert!(store.list(Collection::Cars).await?.is_empty());

        let store = open_store(Some("  ")).await?;

        assert!(store.list(Collection::Settings).await?.is_empty());

        Ok(())
    }
}

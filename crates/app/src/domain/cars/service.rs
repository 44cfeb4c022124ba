//! Cars service.

use std::sync::Arc;

use async_trait::async_trait;
use forecourt::{
    cars::{Car, CarDetails},
    slug::{self, slugify},
};
use jiff::Timestamp;
use mockall::automock;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::cars::{errors::CarsServiceError, repository::CarsRepository},
    store::{Collection, DocumentStore, soft_read},
};

/// Attempts at a random duplicate suffix before settling for the next sequential one.
const DUPLICATE_SUFFIX_ATTEMPTS: usize = 32;

#[derive(Clone)]
pub struct StoreCarsService {
    repository: CarsRepository,
}

impl StoreCarsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: CarsRepository::new(store),
        }
    }

    async fn unique_slug(
        &self,
        name: &str,
        except_key: Option<&str>,
    ) -> Result<String, CarsServiceError> {
        let taken = self.repository.taken_slugs(except_key).await?;

        Ok(slug::unique(&slugify(name), |candidate| taken.contains(candidate)))
    }
}

#[async_trait]
impl CarsService for StoreCarsService {
    async fn list_cars(&self) -> Result<Vec<Car>, CarsServiceError> {
        Ok(soft_read(self.repository.list_cars().await, Collection::Cars)?)
    }

    async fn get_car(&self, id: &str) -> Result<Car, CarsServiceError> {
        soft_read(self.repository.resolve(id).await, Collection::Cars)?
            .map(|(_, car)| car)
            .ok_or(CarsServiceError::NotFound)
    }

    async fn get_car_by_slug(&self, slug: &str) -> Result<Car, CarsServiceError> {
        soft_read(self.repository.find_by_slug(slug).await, Collection::Cars)?
            .ok_or(CarsServiceError::NotFound)
    }

    async fn create_car(&self, details: CarDetails) -> Result<Car, CarsServiceError> {
        details.validate()?;

        let now = Timestamp::now();
        let mut car = Car::new(Uuid::now_v7().to_string(), details);

        car.slug = self.unique_slug(car.name(), None).await?;
        car.created_at = Some(now);
        car.updated_at = Some(now);

        self.repository.insert_car(&car).await?;

        info!(car.id = %car.id, car.slug = %car.slug, "car created");

        Ok(car)
    }

    async fn update_car(&self, id: &str, details: CarDetails) -> Result<Car, CarsServiceError> {
        details.validate()?;

        let (key, existing) = self
            .repository
            .resolve(id)
            .await?
            .ok_or(CarsServiceError::NotFound)?;

        let mut car = Car::new(existing.id, details);

        car.slug = self.unique_slug(car.name(), Some(&key)).await?;
        car.created_at = existing.created_at;
        car.updated_at = Some(Timestamp::now());

        self.repository.overwrite_car(&key, &car).await?;

        info!(car.id = %car.id, car.slug = %car.slug, "car updated");

        Ok(car)
    }

    async fn duplicate_car(&self, id: &str) -> Result<Car, CarsServiceError> {
        let (_, source) = self
            .repository
            .resolve(id)
            .await?
            .ok_or(CarsServiceError::NotFound)?;

        let now = Timestamp::now();
        let mut copy = source.duplicate(Uuid::now_v7().to_string());
        let taken = self.repository.taken_slugs(None).await?;

        copy.slug = duplicate_slug(&copy.slug, &taken);
        copy.created_at = Some(now);
        copy.updated_at = Some(now);

        self.repository.insert_car(&copy).await?;

        info!(source.id = %source.id, car.id = %copy.id, car.slug = %copy.slug, "car duplicated");

        Ok(copy)
    }

    async fn delete_car(&self, id: &str) -> Result<(), CarsServiceError> {
        let (key, _) = self
            .repository
            .resolve(id)
            .await?
            .ok_or(CarsServiceError::NotFound)?;

        if !self.repository.delete_car(&key).await? {
            return Err(CarsServiceError::NotFound);
        }

        info!(car.key = %key, "car deleted");

        Ok(())
    }
}

/// `base` plus a random four-digit suffix not already in `taken`.
fn duplicate_slug(base: &str, taken: &FxHashSet<String>) -> String {
    (0..DUPLICATE_SUFFIX_ATTEMPTS)
        .map(|_| slug::with_suffix(base, random_suffix()))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| slug::unique(base, |candidate| taken.contains(candidate)))
}

fn random_suffix() -> u32 {
    rand::thread_rng().gen_range(1000..=9999)
}

#[automock]
#[async_trait]
pub trait CarsService: Send + Sync {
    /// Every car, including hidden ones. Empty when the store is offline.
    async fn list_cars(&self) -> Result<Vec<Car>, CarsServiceError>;

    /// A car by id, falling back to its store key.
    async fn get_car(&self, id: &str) -> Result<Car, CarsServiceError>;

    /// A car by exact slug.
    async fn get_car_by_slug(&self, slug: &str) -> Result<Car, CarsServiceError>;

    /// Validates and stores a new car with a fresh id and unique slug.
    async fn create_car(&self, details: CarDetails) -> Result<Car, CarsServiceError>;

    /// Replaces a car's details, regenerating its slug.
    async fn update_car(&self, id: &str, details: CarDetails) -> Result<Car, CarsServiceError>;

    /// Copies a car under a new id, name and slug.
    async fn duplicate_car(&self, id: &str) -> Result<Car, CarsServiceError>;

    /// Permanently removes a car.
    async fn delete_car(&self, id: &str) -> Result<(), CarsServiceError>;
}

#[cfg(test)]
mod tests {
    use forecourt::slug::is_slug;
    use serde_json::json;
    use testresult::TestResult;

    use crate::store::{MemoryDocumentStore, MockDocumentStore, StoreError};

    use super::*;

    fn details(name: &str) -> CarDetails {
        CarDetails {
            name: name.to_string(),
            category: "Sports".to_string(),
            seats: 4,
            ..CarDetails::default()
        }
    }

    fn service() -> (Arc<MemoryDocumentStore>, StoreCarsService) {
        let store = Arc::new(MemoryDocumentStore::new());

        (store.clone(), StoreCarsService::new(store))
    }

    fn offline_store() -> MockDocumentStore {
        let mut store = MockDocumentStore::new();

        store
            .expect_list()
            .returning(|_| Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut)));
        store
            .expect_find_by_field()
            .returning(|_, _, _| Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut)));
        store
            .expect_get()
            .returning(|_, _| Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut)));

        store.expect_insert().never();
        store.expect_set().never();
        store.expect_delete().never();

        store
    }

    #[tokio::test]
    async fn create_car_stores_id_as_key() -> TestResult {
        let (store, service) = service();

        let car = service.create_car(details("Toyota Supra")).await?;

        let stored = store.get(Collection::Cars, &car.id).await?;

        assert_eq!(car.slug, "toyota-supra");
        assert!(car.created_at.is_some());
        assert_eq!(
            stored.and_then(|doc| doc.data.get("id").cloned()),
            Some(json!(car.id))
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_car_rejects_blank_names() {
        let (_, service) = service();

        let result = service.create_car(details("  ")).await;

        assert!(matches!(result, Err(CarsServiceError::Invalid(_))));
    }

    #[tokio::test]
    async fn conflicting_slugs_get_smallest_free_suffix() -> TestResult {
        let (_, service) = service();

        let first = service.create_car(details("Honda NSX")).await?;
        let second = service.create_car(details("Honda NSX")).await?;
        let third = service.create_car(details("honda nsx")).await?;

        assert_eq!(first.slug, "honda-nsx");
        assert_eq!(second.slug, "honda-nsx-2");
        assert_eq!(third.slug, "honda-nsx-3");

        Ok(())
    }

    #[tokio::test]
    async fn get_car_falls_back_to_store_key() -> TestResult {
        let (store, service) = service();

        store
            .set(Collection::Cars, "legacy-key", json!({ "name": "Mazda RX-7", "slug": "mazda-rx-7" }))
            .await?;

        let car = service.get_car("legacy-key").await?;

        assert_eq!(car.id, "legacy-key");
        assert_eq!(car.name(), "Mazda RX-7");

        Ok(())
    }

    #[tokio::test]
    async fn get_car_by_slug_does_not_fall_back_to_id() -> TestResult {
        let (_, service) = service();

        let car = service.create_car(details("Subaru 22B")).await?;

        assert_eq!(service.get_car_by_slug("subaru-22b").await?.id, car.id);
        assert!(matches!(
            service.get_car_by_slug(&car.id).await,
            Err(CarsServiceError::NotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_car_regenerates_slug_and_keeps_identity() -> TestResult {
        let (_, service) = service();

        let original = service.create_car(details("Nissan Silvia")).await?;
        let updated = service
            .update_car(&original.id, details("Nissan Silvia Spec-R"))
            .await?;

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.slug, "nissan-silvia-spec-r");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(service.list_cars().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_car_keeps_its_own_slug() -> TestResult {
        let (_, service) = service();

        let car = service.create_car(details("Honda S2000")).await?;
        let mut changed = details("Honda S2000");

        changed.seats = 2;

        let updated = service.update_car(&car.id, changed).await?;

        assert_eq!(updated.slug, "honda-s2000");

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_car_gets_new_identity_and_preserves_fields() -> TestResult {
        let (_, service) = service();

        let mut source_details = details("Toyota Century");

        source_details.features = vec!["V12".to_string()];

        let source = service.create_car(source_details).await?;
        let copy = service.duplicate_car(&source.id).await?;

        assert_ne!(copy.id, source.id);
        assert_ne!(copy.slug, source.slug);
        assert!(is_slug(&copy.slug));
        assert!(copy.slug.starts_with("toyota-century-copy-"));
        assert_eq!(copy.name(), "Toyota Century (Copy)");
        assert_eq!(copy.details.features, source.details.features);
        assert_eq!(copy.details.seats, source.details.seats);
        assert_eq!(service.list_cars().await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn delete_car_removes_and_then_reports_not_found() -> TestResult {
        let (_, service) = service();

        let car = service.create_car(details("Daihatsu Copen")).await?;

        service.delete_car(&car.id).await?;

        assert!(matches!(
            service.delete_car(&car.id).await,
            Err(CarsServiceError::NotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn reads_degrade_when_offline() -> TestResult {
        let service = StoreCarsService::new(Arc::new(offline_store()));

        assert!(service.list_cars().await?.is_empty());
        assert!(matches!(
            service.get_car("abc").await,
            Err(CarsServiceError::NotFound)
        ));
        assert!(matches!(
            service.get_car_by_slug("abc").await,
            Err(CarsServiceError::NotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn writes_report_offline() {
        let service = StoreCarsService::new(Arc::new(offline_store()));

        let result = service.create_car(details("Toyota Supra")).await;

        assert!(matches!(result, Err(CarsServiceError::Offline)));
        assert!(
            result
                .err()
                .is_some_and(|error| error.to_string().starts_with("You appear to be offline"))
        );
    }

    #[test]
    fn duplicate_slug_uses_four_digit_suffix() {
        let taken = FxHashSet::default();

        let slug = duplicate_slug("mazda-rx-7-copy", &taken);
        let suffix = slug.trim_start_matches("mazda-rx-7-copy-");

        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|ch| ch.is_ascii_digit()));
    }
}

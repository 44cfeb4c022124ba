//! Cars Repository

use std::sync::Arc;

use forecourt::cars::Car;
use rustc_hash::FxHashSet;
use tracing::warn;

use crate::store::{Collection, Document, DocumentStore, StoreError};

const COLLECTION: Collection = Collection::Cars;

#[derive(Clone)]
pub(crate) struct CarsRepository {
    store: Arc<dyn DocumentStore>,
}

impl CarsRepository {
    pub(crate) fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Every decodable car; malformed documents are skipped.
    pub(crate) async fn list_cars(&self) -> Result<Vec<Car>, StoreError> {
        let documents = self.store.list(COLLECTION).await?;

        Ok(documents
            .into_iter()
            .filter_map(|document| {
                let key = document.key.clone();

                decode(document)
                    .inspect_err(|error| warn!(%key, %error, "skipping malformed car document"))
                    .ok()
            })
            .collect())
    }

    pub(crate) async fn find_by_slug(&self, slug: &str) -> Result<Option<Car>, StoreError> {
        let documents = self.store.find_by_field(COLLECTION, "slug", slug).await?;

        documents
            .into_iter()
            .next()
            .map(decode)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Locate a car by its `id` field, falling back to treating `id` as the store key.
    ///
    /// Returns the store key alongside the car. Cars found through the key fallback have
    /// their `id` set to that key.
    pub(crate) async fn resolve(&self, id: &str) -> Result<Option<(String, Car)>, StoreError> {
        let by_field = self.store.find_by_field(COLLECTION, "id", id).await?;

        if let Some(document) = by_field.into_iter().next() {
            let key = document.key.clone();

            return Ok(Some((key, decode(document)?)));
        }

        let Some(document) = self.store.get(COLLECTION, id).await? else {
            return Ok(None);
        };

        let key = document.key.clone();
        let mut car = decode(document)?;

        car.id.clone_from(&key);

        Ok(Some((key, car)))
    }

    /// Slugs held by cars other than the one stored under `except_key`.
    pub(crate) async fn taken_slugs(
        &self,
        except_key: Option<&str>,
    ) -> Result<FxHashSet<String>, StoreError> {
        let documents = self.store.list(COLLECTION).await?;

        Ok(documents
            .into_iter()
            .filter(|document| Some(document.key.as_str()) != except_key)
            .filter_map(|document| {
                document
                    .data
                    .get("slug")
                    .and_then(|slug| slug.as_str())
                    .map(ToString::to_string)
            })
            .collect())
    }

    /// Insert a new car under its own id.
    pub(crate) async fn insert_car(&self, car: &Car) -> Result<(), StoreError> {
        self.store
            .insert(COLLECTION, &car.id, serde_json::to_value(car)?)
            .await?;

        Ok(())
    }

    pub(crate) async fn overwrite_car(&self, key: &str, car: &Car) -> Result<(), StoreError> {
        self.store
            .set(COLLECTION, key, serde_json::to_value(car)?)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_car(&self, key: &str) -> Result<bool, StoreError> {
        self.store.delete(COLLECTION, key).await
    }
}

/// Decode a car document, filling a missing `id` from the store key.
fn decode(document: Document) -> Result<Car, serde_json::Error> {
    let mut car: Car = serde_json::from_value(document.data)?;

    if car.id.is_empty() {
        car.id = document.key;
    }

    Ok(car)
}

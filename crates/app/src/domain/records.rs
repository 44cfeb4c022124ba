//! Generic repository for lead records (inquiries and bookings): JSON documents stored under
//! their own `id`.

use std::{marker::PhantomData, sync::Arc};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::store::{Collection, DocumentStore, StoreError};

pub(crate) struct RecordRepository<T> {
    store: Arc<dyn DocumentStore>,
    collection: Collection,
    record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            collection: self.collection,
            record: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> RecordRepository<T> {
    pub(crate) fn new(store: Arc<dyn DocumentStore>, collection: Collection) -> Self {
        Self {
            store,
            collection,
            record: PhantomData,
        }
    }

    pub(crate) fn collection(&self) -> Collection {
        self.collection
    }

    /// Every decodable record; malformed documents are skipped.
    pub(crate) async fn list(&self) -> Result<Vec<T>, StoreError> {
        let documents = self.store.list(self.collection).await?;
        let collection = self.collection;

        Ok(documents
            .into_iter()
            .filter_map(|document| {
                serde_json::from_value(document.data)
                    .inspect_err(|error| {
                        warn!(%collection, key = %document.key, %error, "skipping malformed record");
                    })
                    .ok()
            })
            .collect())
    }

    /// The first record whose `id` field matches, with its store key.
    pub(crate) async fn find(&self, id: &str) -> Result<Option<(String, T)>, StoreError> {
        let documents = self.store.find_by_field(self.collection, "id", id).await?;

        let Some(document) = documents.into_iter().next() else {
            return Ok(None);
        };

        Ok(Some((document.key, serde_json::from_value(document.data)?)))
    }

    pub(crate) async fn insert(&self, id: &str, record: &T) -> Result<(), StoreError> {
        self.store
            .insert(self.collection, id, serde_json::to_value(record)?)
            .await?;

        Ok(())
    }

    /// Overwrite the given top-level fields and return the updated record.
    pub(crate) async fn merge(&self, key: &str, fields: Value) -> Result<T, StoreError> {
        let document = self.store.merge(self.collection, key, fields).await?;

        Ok(serde_json::from_value(document.data)?)
    }

    /// Delete every document whose `id` field matches; there is no key fallback.
    pub(crate) async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let documents = self.store.find_by_field(self.collection, "id", id).await?;
        let mut deleted = false;

        for document in documents {
            deleted |= self.store.delete(self.collection, &document.key).await?;
        }

        Ok(deleted)
    }
}

//! In-memory document store, used when no database is configured and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{Collection, Document, DocumentStore, StoreError, expect_object};

type Documents = BTreeMap<String, Value>;

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<FxHashMap<Collection, Documents>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(key, data)| Document::new(key.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .and_then(|documents| documents.get(key))
            .map(|data| Document::new(key, data.clone())))
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|(_, data)| data.get(field).and_then(Value::as_str) == Some(value))
                    .map(|(key, data)| Document::new(key.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        expect_object(&data)?;

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if documents.contains_key(key) {
            return Err(StoreError::AlreadyExists);
        }

        documents.insert(key.to_string(), data.clone());

        Ok(Document::new(key, data))
    }

    async fn set(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        expect_object(&data)?;

        let mut collections = self.collections.write().await;

        collections
            .entry(collection)
            .or_default()
            .insert(key.to_string(), data.clone());

        Ok(Document::new(key, data))
    }

    async fn merge(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        let Value::Object(fields) = data else {
            return Err(StoreError::NotAnObject);
        };

        let mut collections = self.collections.write().await;
        let stored = collections
            .entry(collection)
            .or_default()
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        if let Value::Object(existing) = &mut *stored {
            existing.extend(fields);
        } else {
            *stored = Value::Object(fields);
        }

        Ok(Document::new(key, stored.clone()))
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;

        Ok(collections
            .get_mut(&collection)
            .is_some_and(|documents| documents.remove(key).is_some()))
    }
}

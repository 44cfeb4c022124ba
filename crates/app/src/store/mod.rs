//! Document Store
//!
//! Named collections of JSON documents addressed by a string key.

use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A collection of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Cars,
    Inquiries,
    Bookings,
    Settings,
    DeviceTokens,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cars => "cars",
            Self::Inquiries => "inquiries",
            Self::Bookings => "bookings",
            Self::Settings => "settings",
            Self::DeviceTokens => "device_tokens",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document and its key.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: String,
    pub data: Value,
}

impl Document {
    #[must_use]
    pub fn new(key: impl Into<String>, data: Value) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable")]
    Unavailable(#[source] sqlx::Error),

    #[error("document already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),

    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("invalid document")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the store could not be reached at all.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(error),
            sqlx::Error::Database(ref database)
                if database.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Self::AlreadyExists
            }
            _ => Self::Sql(error),
        }
    }
}

#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in a collection, ordered by key.
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// A document by its store key.
    async fn get(&self, collection: Collection, key: &str)
    -> Result<Option<Document>, StoreError>;

    /// Documents whose top-level string `field` equals `value`, ordered by key.
    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, StoreError>;

    /// Create a document; fails with [`StoreError::AlreadyExists`] when the key is taken.
    async fn insert(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError>;

    /// Create or overwrite a document.
    async fn set(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError>;

    /// Create a document, or overwrite only the top-level fields present in `data`.
    async fn merge(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError>;

    /// Remove a document, returning whether it existed.
    async fn delete(&self, collection: Collection, key: &str) -> Result<bool, StoreError>;
}

/// Treat an unreachable store as an empty read.
///
/// Reads degrade to "no data" when the store is offline: lists come back empty and lookups
/// come back as not found. Every other error is passed through.
///
/// # Errors
///
/// Returns the original error unless it is [`StoreError::Unavailable`].
pub fn soft_read<T: Default>(
    result: Result<T, StoreError>,
    collection: Collection,
) -> Result<T, StoreError> {
    match result {
        Err(StoreError::Unavailable(error)) => {
            warn!(%collection, %error, "document store unavailable; serving empty result");

            Ok(T::default())
        }
        other => other,
    }
}

pub(crate) fn expect_object(data: &Value) -> Result<(), StoreError> {
    if data.is_object() {
        Ok(())
    } else {
        Err(StoreError::NotAnObject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_errors_are_unavailable() {
        assert!(StoreError::from(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(StoreError::from(sqlx::Error::PoolClosed).is_unavailable());
        assert!(!StoreError::from(sqlx::Error::RowNotFound).is_unavailable());
    }

    #[test]
    fn soft_read_swallows_only_unavailable() {
        let offline: Result<Vec<Document>, _> =
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut));
        let broken: Result<Vec<Document>, _> = Err(StoreError::AlreadyExists);

        assert!(matches!(soft_read(offline, Collection::Cars), Ok(docs) if docs.is_empty()));
        assert!(matches!(
            soft_read(broken, Collection::Cars),
            Err(StoreError::AlreadyExists)
        ));
    }

    #[test]
    fn collection_names_are_stable() {
        assert_eq!(Collection::DeviceTokens.to_string(), "device_tokens");
        assert_eq!(Collection::Cars.as_str(), "cars");
    }
}

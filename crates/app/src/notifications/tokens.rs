//! Registered device tokens.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::{Collection, DocumentStore, StoreError};

const COLLECTION: Collection = Collection::DeviceTokens;

/// Default token lifetime: 60 days.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(60 * 24);

/// A device registered for push notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceToken {
    pub token: String,
    pub registered_at: Timestamp,
}

/// Device tokens persisted in the document store, expiring after a fixed lifetime.
///
/// Re-registering a token refreshes its registration time.
#[derive(Clone)]
pub struct DeviceTokenStore {
    store: Arc<dyn DocumentStore>,
    ttl: SignedDuration,
}

impl DeviceTokenStore {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, ttl: SignedDuration) -> Self {
        Self { store, ttl }
    }

    /// Record `token` as registered at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store rejects the write.
    pub async fn register(&self, token: &str, now: Timestamp) -> Result<DeviceToken, StoreError> {
        let device = DeviceToken {
            token: token.to_string(),
            registered_at: now,
        };

        self.store
            .set(COLLECTION, token, serde_json::to_value(&device)?)
            .await?;

        Ok(device)
    }

    /// Tokens registered within the lifetime, oldest first. Expired and malformed entries
    /// are purged along the way.
    ///
    /// # Errors
    ///
    /// Returns an error when listing fails. Failed purges are only logged.
    pub async fn list_active(&self, now: Timestamp) -> Result<Vec<DeviceToken>, StoreError> {
        let documents = self.store.list(COLLECTION).await?;
        // A lifetime reaching past the representable range never expires
        let oldest = now.checked_sub(self.ttl).unwrap_or(Timestamp::MIN);

        let mut active = Vec::with_capacity(documents.len());

        for document in documents {
            match serde_json::from_value::<DeviceToken>(document.data) {
                Ok(device) if device.registered_at >= oldest => active.push(device),
                Ok(_) => {
                    debug!(key = %document.key, "purging expired device token");
                    self.purge(&document.key).await;
                }
                Err(error) => {
                    warn!(key = %document.key, %error, "purging malformed device token");
                    self.purge(&document.key).await;
                }
            }
        }

        active.sort_by_key(|device| device.registered_at);

        Ok(active)
    }

    /// Forget a token.
    ///
    /// # Errors
    ///
    /// Returns an error when the store rejects the delete.
    pub async fn remove(&self, token: &str) -> Result<bool, StoreError> {
        self.store.delete(COLLECTION, token).await
    }

    async fn purge(&self, key: &str) {
        if let Err(error) = self.store.delete(COLLECTION, key).await {
            warn!(%key, %error, "failed to purge device token");
        }
    }
}

//! Settings service.

use std::sync::Arc;

use async_trait::async_trait;
use forecourt::settings::{SETTINGS_KEY, SettingsPatch, WebsiteSettings, merge_patch};
use mockall::automock;
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    domain::settings::errors::SettingsServiceError,
    store::{Collection, DocumentStore, soft_read},
};

const COLLECTION: Collection = Collection::Settings;

#[derive(Clone)]
pub struct StoreSettingsService {
    store: Arc<dyn DocumentStore>,
}

impl StoreSettingsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsService for StoreSettingsService {
    async fn get_settings(&self) -> Result<WebsiteSettings, SettingsServiceError> {
        let stored = soft_read(self.store.get(COLLECTION, SETTINGS_KEY).await, COLLECTION)?;

        Ok(WebsiteSettings::from_stored(
            stored.map(|document| document.data),
        )?)
    }

    async fn update_settings(
        &self,
        patch: SettingsPatch,
    ) -> Result<WebsiteSettings, SettingsServiceError> {
        let mut document = self
            .store
            .get(COLLECTION, SETTINGS_KEY)
            .await?
            .map_or_else(|| Value::Object(Map::new()), |document| document.data);

        let fields = patch.into_object()?;
        let changed: Vec<&str> = fields.keys().map(String::as_str).collect();

        info!(?changed, "updating website settings");

        merge_patch(&mut document, Value::Object(fields));

        // Nothing is written unless the merged document still reads back
        let settings = WebsiteSettings::from_stored(Some(document.clone()))?;

        self.store.set(COLLECTION, SETTINGS_KEY, document).await?;

        Ok(settings)
    }
}

#[automock]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Current settings with defaults filled in. Defaults alone when the store is offline.
    async fn get_settings(&self) -> Result<WebsiteSettings, SettingsServiceError>;

    /// Merge a partial update into the stored settings, preserving unspecified fields.
    async fn update_settings(
        &self,
        patch: SettingsPatch,
    ) -> Result<WebsiteSettings, SettingsServiceError>;
}

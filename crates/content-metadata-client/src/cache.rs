//! In-memory record cache shared by metadata clients.

use content_metadata_core::{ContentConfig, ContentEncryptionConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache key of an encryption config.
///
/// Kept as two fields so `("1", "23")` and `("12", "3")` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncryptionCacheKey {
    pub id: String,
    pub bitrate: String,
}

impl EncryptionCacheKey {
    pub fn new(id: &str, bitrate: &str) -> Self {
        Self {
            id: id.to_string(),
            bitrate: bitrate.to_string(),
        }
    }
}

/// Memoized metadata records.
///
/// Entries are written once per key and never invalidated. Clones share the
/// same maps, so one cache can back several clients.
#[derive(Clone, Debug, Default)]
pub struct MetadataCache {
    configs: Arc<RwLock<HashMap<String, ContentConfig>>>,
    encryption_configs: Arc<RwLock<HashMap<EncryptionCacheKey, ContentEncryptionConfig>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_config(&self, id: &str) -> Option<ContentConfig> {
        let configs = self.configs.read().await;
        configs.get(id).cloned()
    }

    /// Store a config unless one is already cached for `id`.
    pub async fn insert_config(&self, id: &str, config: ContentConfig) {
        let mut configs = self.configs.write().await;
        configs.entry(id.to_string()).or_insert(config);
    }

    pub async fn get_encryption_config(
        &self,
        key: &EncryptionCacheKey,
    ) -> Option<ContentEncryptionConfig> {
        let encryption_configs = self.encryption_configs.read().await;
        encryption_configs.get(key).cloned()
    }

    /// Store an encryption config unless one is already cached for `key`.
    pub async fn insert_encryption_config(
        &self,
        key: EncryptionCacheKey,
        config: ContentEncryptionConfig,
    ) {
        let mut encryption_configs = self.encryption_configs.write().await;
        encryption_configs.entry(key).or_insert(config);
    }

    pub async fn config_len(&self) -> usize {
        self.configs.read().await.len()
    }

    pub async fn encryption_config_len(&self) -> usize {
        self.encryption_configs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.config_len().await == 0 && self.encryption_config_len().await == 0
    }
}

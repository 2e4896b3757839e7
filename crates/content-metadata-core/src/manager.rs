//! Retrieval abstraction trait
//!
//! Consumers depend on `ContentManager` rather than on the HTTP client so a
//! fake can stand in for the metadata service in their own tests.

use async_trait::async_trait;

use crate::error::MetadataResult;
use crate::models::{ContentConfig, ContentEncryptionConfig};

#[async_trait]
pub trait ContentManager: Send + Sync {
    /// Metadata configuration of a content.
    async fn get_config(&self, id: &str) -> MetadataResult<ContentConfig>;

    /// Encryption configuration of a content for one bitrate.
    async fn get_encryption_config(
        &self,
        id: &str,
        bitrate: &str,
    ) -> MetadataResult<ContentEncryptionConfig>;
}

//! HTTP client for the content metadata service.
//!
//! Fetches content configs and content encryption configs over HTTP+JSON and,
//! when caching is enabled, memoizes every successfully decoded record in a
//! [`MetadataCache`]. A cached record is returned as-is without asking the
//! service again.
//!
//! `Ok` always corresponds to a 200 from the service (or a cache hit); use
//! [`MetadataError::status_code`] to recover the status of a failed call.

pub mod cache;

use async_trait::async_trait;
use content_metadata_core::{
    ClientConfig, ContentConfig, ContentEncryptionConfig, ContentManager, LogLevel, MetadataError,
    MetadataResult,
};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

pub use cache::{EncryptionCacheKey, MetadataCache};

/// Client for the content metadata service.
#[derive(Clone, Debug)]
pub struct ContentMetadataClient {
    http: Client,
    base_url: Url,
    cache: Option<MetadataCache>,
}

impl ContentMetadataClient {
    /// Build a client for `base_url`. A fresh cache is created when `cache_enabled`.
    pub fn new(base_url: &str, http: Client, cache_enabled: bool) -> MetadataResult<Self> {
        let cache = cache_enabled.then(MetadataCache::new);
        Self::build(base_url, http, cache)
    }

    /// Build a caching client backed by an existing, possibly shared, cache.
    pub fn with_cache(base_url: &str, http: Client, cache: MetadataCache) -> MetadataResult<Self> {
        Self::build(base_url, http, Some(cache))
    }

    /// Build a client and its HTTP transport from configuration.
    pub fn from_config(config: &ClientConfig) -> MetadataResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Self::new(&config.service_url, http, config.cache_enabled)
    }

    fn build(base_url: &str, http: Client, cache: Option<MetadataCache>) -> MetadataResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| MetadataError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(MetadataError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            http,
            base_url: parsed,
            cache,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn cache(&self) -> Option<&MetadataCache> {
        self.cache.as_ref()
    }

    /// Retrieve the metadata configuration of content `id`.
    pub async fn get_config(&self, id: &str) -> MetadataResult<ContentConfig> {
        if let Some(cache) = &self.cache {
            if let Some(config) = cache.get_config(id).await {
                tracing::info!(content_id = %id, "content config retrieved from cache");
                tracing::debug!(?config, "content config");
                return Ok(config);
            }
        }

        let endpoint = self.endpoint(&["contents", id]).map_err(log_failure)?;
        tracing::debug!(%endpoint, "requesting content config");

        let response = self.http.get(endpoint).send().await.map_err(log_failure)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(log_failure(remote_error(response).await));
        }

        tracing::info!("decoding content config...");
        let body = response.bytes().await.map_err(log_failure)?;
        let config = ContentConfig::from_body(&body).map_err(log_failure)?;
        tracing::info!("content config successfully decoded");
        tracing::debug!(?config, "content config");

        if let Some(cache) = &self.cache {
            cache.insert_config(id, config.clone()).await;
        }

        Ok(config)
    }

    /// Retrieve the encryption configuration of content `id` for `bitrate`.
    ///
    /// Neither argument is validated locally; the service decides.
    pub async fn get_encryption_config(
        &self,
        id: &str,
        bitrate: &str,
    ) -> MetadataResult<ContentEncryptionConfig> {
        let cache_key = EncryptionCacheKey::new(id, bitrate);
        if let Some(cache) = &self.cache {
            if let Some(config) = cache.get_encryption_config(&cache_key).await {
                tracing::info!(content_id = %id, bitrate, "content encryption config retrieved from cache");
                tracing::debug!(?config, "content encryption config");
                return Ok(config);
            }
        }

        let mut endpoint = self
            .endpoint(&["contents", id, "encryption-percentage"])
            .map_err(log_failure)?;
        endpoint.query_pairs_mut().append_pair("bitrate", bitrate);
        tracing::debug!(%endpoint, "requesting content encryption config");

        let response = self.http.get(endpoint).send().await.map_err(log_failure)?;

        let status = response.status();
        let body = response.bytes().await.map_err(log_failure)?;

        if status != StatusCode::OK {
            return Err(log_failure(MetadataError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }));
        }

        tracing::info!("decoding content encryption config...");
        let config = ContentEncryptionConfig::from_body(&body).map_err(log_failure)?;
        tracing::info!("content encryption config successfully decoded");
        tracing::debug!(?config, "content encryption config");

        if let Some(cache) = &self.cache {
            cache
                .insert_encryption_config(cache_key, config.clone())
                .await;
        }

        Ok(config)
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment.
    ///
    /// `.` and `..` are rejected: URL parsing resolves them (even as `%2E`),
    /// which would address a different route.
    fn endpoint(&self, segments: &[&str]) -> MetadataResult<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(MetadataError::InvalidRequest(format!(
                "path segment '{}' cannot be sent to the service",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        // Checked at construction: the base URL can carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentManager for ContentMetadataClient {
    async fn get_config(&self, id: &str) -> MetadataResult<ContentConfig> {
        ContentMetadataClient::get_config(self, id).await
    }

    async fn get_encryption_config(
        &self,
        id: &str,
        bitrate: &str,
    ) -> MetadataResult<ContentEncryptionConfig> {
        ContentMetadataClient::get_encryption_config(self, id, bitrate).await
    }
}

/// Turn a non-200 response into `MetadataError::Remote`, reading its body.
async fn remote_error(response: reqwest::Response) -> MetadataError {
    let status = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => MetadataError::Remote {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        },
        Err(e) => MetadataError::Request(e),
    }
}

/// Log a failure at the level its kind calls for and hand it back.
fn log_failure(err: impl Into<MetadataError>) -> MetadataError {
    let err = err.into();
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(status = err.status_code(), "{}", err),
        LogLevel::Error => tracing::error!(code = err.error_code(), "{}", err),
    }
    err
}

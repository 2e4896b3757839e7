//! Configuration module
//!
//! Client settings read from the environment (and a `.env` file when present).

use std::env;

use crate::error::MetadataError;

// Common constants
const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings needed to build a metadata client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_url: String,
    pub cache_enabled: bool,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            cache_enabled: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load from CONTENT_METADATA_URL (or METADATA_SERVICE_URL),
    /// CONTENT_METADATA_CACHE_ENABLED and CONTENT_METADATA_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self, MetadataError> {
        dotenvy::dotenv().ok();

        let service_url = env::var("CONTENT_METADATA_URL")
            .or_else(|_| env::var("METADATA_SERVICE_URL"))
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());

        let cache_enabled = match env::var("CONTENT_METADATA_CACHE_ENABLED") {
            Ok(value) => parse_bool(&value).ok_or_else(|| {
                MetadataError::Config(format!(
                    "CONTENT_METADATA_CACHE_ENABLED must be a boolean, got '{}'",
                    value
                ))
            })?,
            Err(_) => true,
        };

        let timeout_secs = match env::var("CONTENT_METADATA_TIMEOUT_SECS") {
            Ok(value) => value.trim().parse::<u64>().map_err(|_| {
                MetadataError::Config(format!(
                    "CONTENT_METADATA_TIMEOUT_SECS must be a valid number, got '{}'",
                    value
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            service_url,
            cache_enabled,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.timeout_secs == 0 {
            return Err(MetadataError::Config(
                "CONTENT_METADATA_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        reqwest::Url::parse(&self.service_url).map_err(|e| MetadataError::InvalidBaseUrl {
            url: self.service_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

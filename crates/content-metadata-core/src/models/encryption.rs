use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// Encryption percentage applied to one quality tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BitrateEncryption {
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub encryption_percentage: i64,
}

/// Encryption settings of a content for a bitrate, as served by
/// `GET /contents/{id}/encryption-percentage?bitrate={bitrate}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentEncryptionConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub session_based_encryption_percentage: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub viv_encryption_percentage: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub convert_to_vod: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub chosen_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub encryption_percentages_per_bitrates: Vec<BitrateEncryption>,
    /// Response body the record was decoded from, kept verbatim.
    #[serde(skip)]
    pub raw_data: String,
}

impl ContentEncryptionConfig {
    /// Decode a response body, keeping the body itself in `raw_data`.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_slice(body)?;
        config.raw_data = String::from_utf8_lossy(body).into_owned();
        Ok(config)
    }

    /// Encryption percentage of the first tier labelled `quality`.
    pub fn percentage_for_quality(&self, quality: &str) -> Option<i64> {
        self.encryption_percentages_per_bitrates
            .iter()
            .find(|tier| tier.quality == quality)
            .map(|tier| tier.encryption_percentage)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// Metadata record of a content, as served by `GET /contents/{id}`.
///
/// Keys missing from the response, or set to `null`, decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub partner_uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub session_based_encryption_percentage: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub viv_encryption_percentage: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub convert_to_vod: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cdn_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ContentConfig {
    /// Decode the first JSON value of a response body; anything after it is ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        Self::deserialize(&mut deserializer)
    }
}

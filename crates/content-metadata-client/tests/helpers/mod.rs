//! Test helpers: fixtures and client construction against a mockito server.
//!
//! Run from workspace root: `cargo test -p content-metadata-client`.

#![allow(dead_code)]

use content_metadata_client::ContentMetadataClient;

pub const KNOWN_ID: &str = "f0121a13-8f2a-4dac-ab07-b49e10aeefcf";
pub const OTHER_KNOWN_ID: &str = "9c02fc65-e782-4f85-af92-a3134e028515";
pub const UNKNOWN_ID: &str = "d5583a9c-f4e3-4ca5-88cd-8403f50b4961";

pub const INVALID_UUID_MESSAGE: &str = "Value is not a valid UUID V4 string";
pub const INVALID_BITRATE_MESSAGE: &str = "Bitrates list is not compliant";

pub fn unknown_content_message(id: &str) -> String {
    format!("Content with UUID {} doesn't exist", id)
}

/// Content config body as served for `id`.
pub fn content_config_body(id: &str) -> String {
    format!(
        r#"{{
            "uuid":"{}",
            "partnerUuid":"3db5dabc-90e5-42fe-a286-a8eb720d9ee5",
            "contentName":"Sintel VOD Dash encrypted",
            "contentType":"video-on-demand",
            "sessionBasedEncryptionPercentage":20,
            "vivEncryptionPercentage":20,
            "available":false,
            "convertToVod":false,
            "storageType":"s3",
            "cdnUrl":"",
            "path":"sintel_dash",
            "status":"CREATED"
            }}"#,
        id
    )
}

pub const ENCRYPTION_CONFIG_BODY: &str = r#"{
            "sessionBasedEncryptionPercentage":20,
            "vivEncryptionPercentage":20,
            "contentType":"video-on-demand",
            "contentName":"",
            "convertToVod":false,
            "chosenFrom":"ENCRYPTION_PERCENTAGE_TITLE",
            "encryptionPercentagesPerBitrates":[
                {
                    "quality":"1080",
                    "encryptionPercentage":50
                },
                {
                    "quality":"720",
                    "encryptionPercentage":40
                },
                {
                    "quality":"480",
                    "encryptionPercentage":30
                }
            ]}"#;

pub fn content_config_path(id: &str) -> String {
    format!("/contents/{}", id)
}

pub fn encryption_config_path(id: &str) -> String {
    format!("/contents/{}/encryption-percentage", id)
}

/// Client pointed at `server` using a plain reqwest client.
pub fn client_for(server: &mockito::ServerGuard, cache_enabled: bool) -> ContentMetadataClient {
    ContentMetadataClient::new(&server.url(), reqwest::Client::new(), cache_enabled)
        .expect("mockito URL should parse")
}

/// Base URL on which nothing accepts connections.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

//! Error types module
//!
//! Every failure of the metadata client is a `MetadataError`. Callers that need
//! the HTTP-style status the service interaction ended with use
//! [`MetadataError::status_code`]: remote rejections keep the remote status,
//! everything else maps to 500.

/// Status reported for failures that never produced a usable remote response.
pub const INTERNAL_ERROR_STATUS: u16 = 500;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a remote 4xx
    Debug,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request could not be built, e.g. a path segment the URL cannot carry.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-200 answer from the service. Displays as the response body verbatim.
    #[error("{body}")]
    Remote { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;

impl MetadataError {
    /// Status code the failed call resolves to.
    pub fn status_code(&self) -> u16 {
        match self {
            MetadataError::Remote { status, .. } => *status,
            _ => INTERNAL_ERROR_STATUS,
        }
    }

    /// Machine-readable error code (e.g., "REMOTE_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            MetadataError::InvalidBaseUrl { .. } => "INVALID_BASE_URL",
            MetadataError::InvalidRequest(_) => "INVALID_REQUEST",
            MetadataError::Request(_) => "REQUEST_FAILED",
            MetadataError::Remote { .. } => "REMOTE_ERROR",
            MetadataError::Decode(_) => "DECODE_FAILED",
            MetadataError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the service answered and rejected the request.
    pub fn is_remote(&self) -> bool {
        matches!(self, MetadataError::Remote { .. })
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            MetadataError::Remote { .. } => LogLevel::Debug,
            _ => LogLevel::Error,
        }
    }
}

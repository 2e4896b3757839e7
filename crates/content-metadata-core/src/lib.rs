//! Content Metadata Core
//!
//! Domain models, error types, configuration and the retrieval trait shared by
//! the metadata client and the CLI.

pub mod config;
pub mod error;
pub mod manager;
pub mod models;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{LogLevel, MetadataError, MetadataResult};
pub use manager::ContentManager;
pub use models::{BitrateEncryption, ContentConfig, ContentEncryptionConfig};

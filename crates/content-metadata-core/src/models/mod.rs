pub mod content;
pub mod encryption;
mod serde_helpers;

pub use content::ContentConfig;
pub use encryption::{BitrateEncryption, ContentEncryptionConfig};

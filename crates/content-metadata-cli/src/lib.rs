use anyhow::Context;
use content_metadata_core::MetadataError;
use serde::Serialize;

/// Render a value as pretty-printed JSON.
pub fn to_pretty_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Serialize response")
}

/// Attach the status a failed call resolved to, e.g. `status 400: <body>`.
pub fn describe_failure(err: MetadataError) -> anyhow::Error {
    let status = err.status_code();
    anyhow::Error::new(err).context(format!("status {}", status))
}


/// Initialize tracing for the CLI; logs go to stderr so stdout stays JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

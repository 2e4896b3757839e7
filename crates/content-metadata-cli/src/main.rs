//! content-metadata — command-line client for the content metadata service.
//!
//! Set CONTENT_METADATA_URL (or pass --url). Records are printed as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use content_metadata_cli::{describe_failure, init_tracing, to_pretty_json};
use content_metadata_client::ContentMetadataClient;
use content_metadata_core::ClientConfig;

#[derive(Parser)]
#[command(name = "content-metadata", about = "Content metadata service CLI")]
struct Cli {
    /// Base URL of the metadata service (overrides CONTENT_METADATA_URL)
    #[arg(long, global = true)]
    url: Option<String>,
    /// Disable the in-memory cache
    #[arg(long, global = true)]
    no_cache: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the metadata configuration of a content
    Config {
        /// Content UUID
        id: String,
    },
    /// Get the encryption configuration of a content for a bitrate
    Encryption {
        /// Content UUID
        id: String,
        /// Bitrate, passed to the service as-is
        #[arg(long)]
        bitrate: String,
        /// Print the response body exactly as received
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(url) = cli.url {
        config.service_url = url;
    }
    if cli.no_cache {
        config.cache_enabled = false;
    }

    let client = ContentMetadataClient::from_config(&config).context(
        "Failed to create metadata client. Set CONTENT_METADATA_URL or pass --url",
    )?;

    match cli.command {
        Commands::Config { id } => {
            let response = client.get_config(&id).await.map_err(describe_failure)?;
            println!("{}", to_pretty_json(&response)?);
        }
        Commands::Encryption { id, bitrate, raw } => {
            let response = client
                .get_encryption_config(&id, &bitrate)
                .await
                .map_err(describe_failure)?;
            if raw {
                println!("{}", response.raw_data);
            } else {
                println!("{}", to_pretty_json(&response)?);
            }
        }
    }

    Ok(())
}

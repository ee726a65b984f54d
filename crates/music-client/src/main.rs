//! Music catalog client
//!
//! Prints every album from the configured source, one per line.

use anyhow::Result;
use clap::Parser;
use music_client::{app, cli::Cli, config::ClientConfig};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ClientConfig::load(&cli.config, cli.source.as_deref())?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    debug!("Loaded configuration: {:?}", config);

    let stdout = std::io::stdout();
    app::run(&config.repository, &mut stdout.lock()).await?;

    Ok(())
}

/// Initialize tracing subscriber; logs go to stderr so stdout carries only albums
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("music_client={level},music_repository={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

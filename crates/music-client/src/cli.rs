//! Command-line arguments

use clap::Parser;

/// Default configuration file, without extension (yaml, toml and json are probed)
pub const DEFAULT_CONFIG_PATH: &str = "config/music";

/// Client app for getting music data
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "music-client")]
#[command(about = "Prints the album catalog from the database or the music service")]
pub struct Cli {
    /// The source to fetch the music data from (database or service)
    #[arg(long)]
    pub source: Option<String>,

    /// Path to the configuration file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

//! Client configuration
//!
//! Layered lowest to highest priority:
//!
//! 1. configuration file (`config/music.yaml` by default)
//! 2. `MUSIC_*` environment variables, `__` between sections
//!    (e.g. `MUSIC_DATABASE__HOST`), with `.env` loaded first
//! 3. the `--source` command-line flag

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use music_repository::RepositoryConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MUSIC";

const LOG_LEVEL_KEY: &str = "log_level";

fn default_log_level() -> String {
    "info".to_string()
}

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// The `source`, `database` and `service` keys, handed to the repository factory
    pub repository: RepositoryConfig,

    /// Default log level when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `config_path`, the environment and `source_override`
    ///
    /// A missing configuration file is not an error; a malformed one is.
    pub fn load(config_path: &str, source_override: Option<&str>) -> Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::build(builder, source_override)
            .with_context(|| format!("Failed to load configuration from {}", config_path))
    }

    /// Parse configuration text in the given format
    pub fn parse(content: &str, format: FileFormat, source_override: Option<&str>) -> Result<Self> {
        let builder = Config::builder().add_source(File::from_str(content, format));
        Self::build(builder, source_override)
    }

    // The repository sections are deserialized on their own rather than through
    // `#[serde(flatten)]`, which loses the string-to-number conversion needed for
    // values such as `MUSIC_SERVICE__PORT=50051`.
    fn build(
        builder: ConfigBuilder<DefaultState>,
        source_override: Option<&str>,
    ) -> Result<Self> {
        let config = builder
            .set_override_option("source", source_override.map(str::to_string))?
            .build()?;

        let log_level = match config.get_string(LOG_LEVEL_KEY) {
            Ok(level) => level,
            Err(ConfigError::NotFound(_)) => default_log_level(),
            Err(e) => return Err(anyhow::anyhow!("Invalid {}: {}", LOG_LEVEL_KEY, e)),
        };

        let repository = config
            .try_deserialize::<RepositoryConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;

        Ok(Self {
            repository,
            log_level,
        })
    }
}

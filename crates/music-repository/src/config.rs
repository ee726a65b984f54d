//! Repository configuration types
//!
//! This module provides the typed settings for each album source and the
//! top-level [`RepositoryConfig`] the factory reads from.
//!
//! Settings are deserialized once at startup. Every field is optional so that
//! building a repository never fails; a missing required field is reported as
//! [`RepositoryError::ConfigurationMissing`](crate::RepositoryError) the first
//! time the repository is used.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default PostgreSQL port when `database.port` is not set
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default scheme when `service.network` is not set
pub const DEFAULT_NETWORK: &str = "http";

/// Album source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositorySource {
    /// Load from the PostgreSQL albums table
    Database,
    /// Load from the gRPC music service
    #[default]
    Service,
}

impl RepositorySource {
    /// Resolve a raw `source` value.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. An
    /// absent or empty value means [`RepositorySource::Service`]; so does any
    /// value other than `database`.
    pub fn from_config_value(value: Option<&str>) -> Self {
        let value = value.map(str::trim).unwrap_or_default();

        if value.eq_ignore_ascii_case("database") {
            Self::Database
        } else {
            if !value.is_empty() && !value.eq_ignore_ascii_case("service") {
                tracing::warn!(
                    "Unrecognized source '{}', falling back to the music service",
                    value
                );
            }
            Self::Service
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for the PostgreSQL repository
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Server address (required)
    #[serde(default)]
    pub host: Option<String>,

    /// Credential username (required)
    #[serde(default)]
    pub user: Option<String>,

    /// Credential secret
    #[serde(default)]
    pub password: Option<String>,

    /// Target database name (required)
    ///
    /// Configuration keys arrive lowercased, so `DBName` is read as `dbname`.
    #[serde(default, alias = "dbname")]
    pub db_name: Option<String>,

    /// Server port (default: 5432)
    #[serde(default)]
    pub port: Option<u16>,

    /// libpq-style sslmode: disable, allow, prefer, require, verify-ca, verify-full
    #[serde(default, alias = "sslmode")]
    pub ssl_mode: Option<String>,
}

impl DatabaseSettings {
    /// Create database settings with the four connection parameters
    ///
    /// # Example
    /// ```rust
    /// use music_repository::DatabaseSettings;
    ///
    /// let settings = DatabaseSettings::new("localhost", "postgres", "secret", "recordings")
    ///     .with_ssl_mode("disable");
    /// assert_eq!(settings.port(), 5432);
    /// ```
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        db_name: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            user: Some(user.into()),
            password: Some(password.into()),
            db_name: Some(db_name.into()),
            port: None,
            ssl_mode: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_ssl_mode(mut self, ssl_mode: impl Into<String>) -> Self {
        self.ssl_mode = Some(ssl_mode.into());
        self
    }

    /// Effective port
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_POSTGRES_PORT)
    }
}

// Keeps the password out of logs
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("db_name", &self.db_name)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

/// Endpoint settings for the gRPC repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// URI scheme, `http` or `https` (default: http)
    #[serde(default)]
    pub network: Option<String>,

    /// Service address (required)
    #[serde(default)]
    pub host: Option<String>,

    /// Service port (required)
    #[serde(default)]
    pub port: Option<u16>,

    /// Per-request deadline in seconds; transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ServiceSettings {
    /// Create service settings
    ///
    /// # Example
    /// ```rust
    /// use music_repository::ServiceSettings;
    ///
    /// let settings = ServiceSettings::new("http", "localhost", 50051);
    /// assert_eq!(settings.network(), "http");
    /// ```
    pub fn new(network: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            network: Some(network.into()),
            host: Some(host.into()),
            port: Some(port),
            timeout_secs: None,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Effective scheme, lowercased
    pub fn network(&self) -> String {
        match self.network.as_deref().map(str::trim) {
            Some(network) if !network.is_empty() => network.to_ascii_lowercase(),
            _ => DEFAULT_NETWORK.to_string(),
        }
    }
}

/// Repository configuration
///
/// Mirrors the `source`, `database` and `service` keys of the client
/// configuration file.
///
/// # Examples
///
/// ```rust
/// use music_repository::{DatabaseSettings, RepositoryConfig, RepositorySource, ServiceSettings};
///
/// let config = RepositoryConfig::database(DatabaseSettings::new("db", "app", "pw", "music"));
/// assert_eq!(config.source(), RepositorySource::Database);
///
/// let config = RepositoryConfig::service(ServiceSettings::new("http", "localhost", 50051));
/// assert_eq!(config.source(), RepositorySource::Service);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Raw source name as configured; see [`RepositorySource::from_config_value`]
    #[serde(default)]
    pub source: Option<String>,

    /// PostgreSQL settings
    #[serde(default)]
    pub database: DatabaseSettings,

    /// gRPC service settings
    #[serde(default)]
    pub service: ServiceSettings,
}

impl RepositoryConfig {
    /// Configuration selecting the database repository
    pub fn database(settings: DatabaseSettings) -> Self {
        Self {
            source: Some(RepositorySource::Database.to_string()),
            database: settings,
            service: ServiceSettings::default(),
        }
    }

    /// Configuration selecting the service repository
    pub fn service(settings: ServiceSettings) -> Self {
        Self {
            source: Some(RepositorySource::Service.to_string()),
            database: DatabaseSettings::default(),
            service: settings,
        }
    }

    /// Replace the raw source value
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Resolved source
    pub fn source(&self) -> RepositorySource {
        RepositorySource::from_config_value(self.source.as_deref())
    }
}

//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while fetching albums
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A required setting was absent when the repository was used
    #[error("Missing configuration: {section}.{field}")]
    ConfigurationMissing {
        section: &'static str,
        field: &'static str,
    },

    /// A setting was present but could not be interpreted
    #[error("Invalid value for {field}: {value}")]
    InvalidSetting { field: String, value: String },

    /// The database connection or RPC channel could not be established
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionFailure {
        backend: &'static str,
        message: String,
    },

    /// SQL execution error
    #[error("Query failed: {0}")]
    QueryFailure(#[source] sqlx::Error),

    /// RPC invocation error (deadline, unavailable, malformed response, ...)
    #[error("Remote call failed: {0}")]
    RemoteCallFailure(#[from] tonic::Status),

    /// A row or message could not be turned into an album
    #[error("Failed to decode album: {0}")]
    DecodeFailure(String),
}

impl RepositoryError {
    pub(crate) fn missing(section: &'static str, field: &'static str) -> Self {
        Self::ConfigurationMissing { section, field }
    }

    pub(crate) fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field: field.into(),
            value: value.into(),
        }
    }
}

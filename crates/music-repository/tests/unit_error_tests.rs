//! Unit tests for RepositoryError types and error handling

use music_repository::{RepositoryError, RepositoryResult};
use std::error::Error;

#[test]
fn test_error_configuration_missing_display() {
    let error = RepositoryError::ConfigurationMissing {
        section: "database",
        field: "host",
    };

    assert_eq!(error.to_string(), "Missing configuration: database.host");
}

#[test]
fn test_error_invalid_setting_display() {
    let error = RepositoryError::InvalidSetting {
        field: "service.network".to_string(),
        value: "tcp".to_string(),
    };

    assert_eq!(error.to_string(), "Invalid value for service.network: tcp");
}

#[test]
fn test_error_connection_failure_display() {
    let error = RepositoryError::ConnectionFailure {
        backend: "PostgreSQL",
        message: "connection refused".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Failed to connect to PostgreSQL: connection refused"
    );
}

#[test]
fn test_error_query_failure_keeps_source() {
    let error = RepositoryError::QueryFailure(sqlx::Error::RowNotFound);

    assert!(error.to_string().starts_with("Query failed"));
    assert!(error.source().is_some());
}

#[test]
fn test_error_from_status() {
    let status = tonic::Status::deadline_exceeded("too slow");
    let error: RepositoryError = status.into();

    assert!(matches!(error, RepositoryError::RemoteCallFailure(_)));
    assert!(error.to_string().contains("Remote call failed"));
    assert!(error.to_string().contains("too slow"));
}

#[test]
fn test_error_decode_failure_display() {
    let error = RepositoryError::DecodeFailure("price 'NaN' of album 3".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to decode album: price 'NaN' of album 3"
    );
}

#[test]
fn test_error_debug_format() {
    let error = RepositoryError::ConfigurationMissing {
        section: "service",
        field: "port",
    };
    let debug_str = format!("{:?}", error);

    assert!(debug_str.contains("ConfigurationMissing"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RepositoryError>();
}

#[test]
fn test_error_converts_to_anyhow() {
    let result: RepositoryResult<()> = Err(RepositoryError::ConfigurationMissing {
        section: "service",
        field: "host",
    });

    let err: anyhow::Error = result.unwrap_err().into();
    assert_eq!(err.to_string(), "Missing configuration: service.host");
}

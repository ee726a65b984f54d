//! Tests for layered configuration loading (file, environment, command line)

use music_client::config::ClientConfig;
use music_repository::RepositorySource;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Environment variables are process-wide
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_config(
        "source: database\n\
         database:\n  host: db.local\n  user: music\n  password: secret\n  db_name: recordings\n  port: 6543\n",
    );

    let config = ClientConfig::load(file.path().to_str().unwrap(), None).unwrap();

    assert_eq!(config.repository.source(), RepositorySource::Database);
    assert_eq!(config.repository.database.host.as_deref(), Some("db.local"));
    assert_eq!(config.repository.database.port(), 6543);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");

    let config = ClientConfig::load(path.to_str().unwrap(), None).unwrap();

    assert!(config.repository.source.is_none());
    assert_eq!(config.repository.source(), RepositorySource::Service);
}

#[test]
fn test_load_malformed_file_fails() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_config("service: [unterminated\n");

    let err = ClientConfig::load(file.path().to_str().unwrap(), None).unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to load configuration"));
}

#[test]
fn test_environment_overrides_file_and_flag_overrides_both() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_config("source: database\nservice:\n  host: file-host\n  port: 50051\n");

    std::env::set_var("MUSIC_SERVICE__HOST", "env-host");
    std::env::set_var("MUSIC_SOURCE", "database");
    let result = ClientConfig::load(file.path().to_str().unwrap(), Some("Service"));
    std::env::remove_var("MUSIC_SERVICE__HOST");
    std::env::remove_var("MUSIC_SOURCE");

    let config = result.unwrap();
    assert_eq!(config.repository.service.host.as_deref(), Some("env-host"));
    assert_eq!(config.repository.service.port, Some(50051));
    assert_eq!(config.repository.source.as_deref(), Some("Service"));
    assert_eq!(config.repository.source(), RepositorySource::Service);
}

#[test]
fn test_environment_database_name() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");

    std::env::set_var("MUSIC_DATABASE__DBNAME", "recordings");
    std::env::set_var("MUSIC_DATABASE__PORT", "6543");
    let result = ClientConfig::load(path.to_str().unwrap(), Some("database"));
    std::env::remove_var("MUSIC_DATABASE__DBNAME");
    std::env::remove_var("MUSIC_DATABASE__PORT");

    let config = result.unwrap();
    assert_eq!(config.repository.database.db_name.as_deref(), Some("recordings"));
    assert_eq!(config.repository.database.port(), 6543);
    assert_eq!(config.repository.source(), RepositorySource::Database);
}

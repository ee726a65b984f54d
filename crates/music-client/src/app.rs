//! Fetch-and-print flow

use anyhow::{Context, Result};
use music_core::Album;
use music_repository::{create_repository, AlbumRepository, RepositoryConfig};
use std::io::Write;
use tracing::info;

/// Fetch albums from the configured source and write one line per album to `out`
///
/// Returns the number of albums written.
pub async fn run<W: Write>(config: &RepositoryConfig, out: &mut W) -> Result<usize> {
    let repository = create_repository(config);
    let source = repository.source();

    let albums = repository
        .get_albums()
        .await
        .with_context(|| format!("Failed to get albums from {}", source))?;
    info!("Received {} albums from {}", albums.len(), source);

    write_albums(&albums, out)?;
    Ok(albums.len())
}

/// Write albums in provider order
pub fn write_albums<W: Write>(albums: &[Album], out: &mut W) -> std::io::Result<()> {
    for album in albums {
        writeln!(out, "{}", album)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_albums() {
        let albums = vec![
            Album::new(3, "Blue Train", "John Coltrane", 56.99),
            Album::new(4, "Giant Steps", "John Coltrane", 63.99),
        ];
        let mut out = Vec::new();

        write_albums(&albums, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Id: 3, Artist: John Coltrane, Title: Blue Train, Price: 56.99\n\
             Id: 4, Artist: John Coltrane, Title: Giant Steps, Price: 63.99\n"
        );
    }

    #[test]
    fn test_write_no_albums() {
        let mut out = Vec::new();
        write_albums(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_reports_missing_database_settings() {
        let config = RepositoryConfig::default().with_source("database");
        let mut out = Vec::new();

        let err = run(&config, &mut out).await.unwrap_err();
        let message = format!("{:#}", err);

        assert!(message.contains("Failed to get albums from database"));
        assert!(message.contains("database.host"));
        assert!(out.is_empty());
    }
}

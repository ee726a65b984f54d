//! PostgreSQL album repository
//!
//! Reads the `music.albums` table. By default every call opens its own
//! connection and closes it before returning; [`PostgresRepository::with_pool`]
//! switches to an explicitly shared pool.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use music_core::Album;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgSslMode};
use sqlx::{Connection, FromRow};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::config::DatabaseSettings;
use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::AlbumRepository;

/// Fixed catalog query; columns are read by name into [`AlbumRow`]
pub const QUERY_GET_ALBUMS: &str = "SELECT id, title, artist, price FROM music.albums";

const SECTION: &str = "database";

/// Raw `music.albums` row
#[derive(Debug, Clone, FromRow)]
pub struct AlbumRow {
    pub id: i32,
    pub title: String,
    pub artist: String,
    /// NUMERIC column
    pub price: BigDecimal,
}

impl TryFrom<AlbumRow> for Album {
    type Error = RepositoryError;

    fn try_from(row: AlbumRow) -> Result<Self, Self::Error> {
        let price = row.price.to_string().parse::<f64>().map_err(|e| {
            RepositoryError::DecodeFailure(format!(
                "price '{}' of album {}: {}",
                row.price, row.id, e
            ))
        })?;

        Ok(Album::new(row.id, row.title, row.artist, price))
    }
}

/// PostgreSQL database repository
pub struct PostgresRepository {
    settings: DatabaseSettings,
    /// Shared pool; `None` means connect per call
    pool: Option<PgPool>,
}

impl PostgresRepository {
    /// Create a repository that connects per call using `settings`
    ///
    /// Nothing is validated here; missing settings surface from
    /// [`get_albums`](AlbumRepository::get_albums).
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            pool: None,
        }
    }

    /// Create a repository backed by an existing pool
    pub fn with_pool(pool: PgPool) -> Self {
        Self {
            settings: DatabaseSettings::default(),
            pool: Some(pool),
        }
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    /// Build connection options from the settings
    pub fn connect_options(&self) -> RepositoryResult<PgConnectOptions> {
        let settings = &self.settings;
        let host = required(&settings.host, "host")?;
        let user = required(&settings.user, "user")?;
        let db_name = required(&settings.db_name, "db_name")?;

        let mut options = PgConnectOptions::new()
            .host(host)
            .port(settings.port())
            .username(user)
            .database(db_name);

        if let Some(password) = settings.password.as_deref() {
            options = options.password(password);
        }

        if let Some(ssl_mode) = settings.ssl_mode.as_deref() {
            let mode = PgSslMode::from_str(ssl_mode)
                .map_err(|_| RepositoryError::invalid("database.ssl_mode", ssl_mode))?;
            options = options.ssl_mode(mode);
        }

        Ok(options)
    }

    async fn fetch_rows(&self) -> RepositoryResult<Vec<AlbumRow>> {
        if let Some(pool) = &self.pool {
            return sqlx::query_as::<_, AlbumRow>(QUERY_GET_ALBUMS)
                .fetch_all(pool)
                .await
                .map_err(classify_pool_error);
        }

        let options = self.connect_options()?;
        debug!(
            "Connecting to PostgreSQL at {}:{}",
            options.get_host(),
            options.get_port()
        );

        let mut conn = PgConnection::connect_with(&options).await.map_err(|e| {
            RepositoryError::ConnectionFailure {
                backend: "PostgreSQL",
                message: e.to_string(),
            }
        })?;

        let result = sqlx::query_as::<_, AlbumRow>(QUERY_GET_ALBUMS)
            .fetch_all(&mut conn)
            .await;

        // Close before inspecting the result so failed queries release the connection too
        if let Err(e) = conn.close().await {
            warn!("Failed to close PostgreSQL connection: {}", e);
        }

        result.map_err(RepositoryError::QueryFailure)
    }
}

#[async_trait]
impl AlbumRepository for PostgresRepository {
    async fn get_albums(&self) -> RepositoryResult<Vec<Album>> {
        let albums = into_albums(self.fetch_rows().await?)?;

        info!("Fetched {} albums from PostgreSQL", albums.len());
        Ok(albums)
    }
}

/// Convert rows in query order; the first undecodable row fails the whole batch
fn into_albums(rows: Vec<AlbumRow>) -> RepositoryResult<Vec<Album>> {
    rows.into_iter().map(Album::try_from).collect()
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> RepositoryResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RepositoryError::missing(SECTION, field)),
    }
}

/// Pool acquisition problems are connection failures; anything else came from the query
fn classify_pool_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => RepositoryError::ConnectionFailure {
            backend: "PostgreSQL",
            message: err.to_string(),
        },
        other => RepositoryError::QueryFailure(other),
    }
}

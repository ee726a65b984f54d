//! Configuration-driven repository selection

use async_trait::async_trait;
use music_core::Album;
use tracing::info;

use crate::config::{RepositoryConfig, RepositorySource};
use crate::error::RepositoryResult;
use crate::grpc::GrpcRepository;
use crate::postgres::PostgresRepository;
use crate::traits::AlbumRepository;

/// The repository chosen by [`create_repository`]
pub enum MusicRepository {
    Database(PostgresRepository),
    Service(GrpcRepository),
}

impl MusicRepository {
    /// Which source this repository reads from
    pub fn source(&self) -> RepositorySource {
        match self {
            MusicRepository::Database(_) => RepositorySource::Database,
            MusicRepository::Service(_) => RepositorySource::Service,
        }
    }

    pub fn into_boxed(self) -> Box<dyn AlbumRepository> {
        match self {
            MusicRepository::Database(repo) => Box::new(repo),
            MusicRepository::Service(repo) => Box::new(repo),
        }
    }
}

#[async_trait]
impl AlbumRepository for MusicRepository {
    async fn get_albums(&self) -> RepositoryResult<Vec<Album>> {
        match self {
            MusicRepository::Database(repo) => repo.get_albums().await,
            MusicRepository::Service(repo) => repo.get_albums().await,
        }
    }
}

/// Create the repository named by `config.source`
///
/// Never fails: `database` (any case) selects PostgreSQL, everything else,
/// including an absent or empty source, selects the music service. Settings
/// are checked when the repository is first used.
pub fn create_repository(config: &RepositoryConfig) -> MusicRepository {
    match config.source() {
        RepositorySource::Database => {
            info!("Using PostgreSQL album repository");
            MusicRepository::Database(PostgresRepository::new(config.database.clone()))
        }
        RepositorySource::Service => {
            info!("Using music service album repository");
            MusicRepository::Service(GrpcRepository::new(config.service.clone()))
        }
    }
}

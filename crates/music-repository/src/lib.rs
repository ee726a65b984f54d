//! Album repositories for the music catalog client
//!
//! This crate provides a single read-only interface, [`AlbumRepository`], with
//! two interchangeable backends, and a factory that picks one from
//! configuration.
//!
//! # Backends
//!
//! - **PostgreSQL** ([`PostgresRepository`]): reads the `music.albums` table
//! - **Music service** ([`GrpcRepository`]): calls `MusicService.GetAlbumList`
//!
//! # Quick Start
//!
//! ```no_run
//! use music_repository::{create_repository, AlbumRepository, RepositoryConfig, ServiceSettings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RepositoryConfig::service(ServiceSettings::new("http", "localhost", 50051));
//!
//!     let repo = create_repository(&config);
//!     for album in repo.get_albums().await? {
//!         println!("{}", album);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │        music-client                    │
//! └──────────────┬─────────────────────────┘
//!                │ create_repository(&RepositoryConfig)
//!                ↓
//! ┌────────────────────────────────────────┐
//! │    MusicRepository (AlbumRepository)   │
//! └──────────────┬─────────────────────────┘
//!                │
//!       ┌────────┴────────┐
//!       ↓                 ↓
//! ┌──────────────┐  ┌──────────────────┐
//! │ PostgreSQL   │  │  gRPC            │
//! │ music.albums │  │  MusicService    │
//! └──────────────┘  └──────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod grpc;
pub mod postgres;
pub mod traits;

// Re-exports - Configuration
pub use config::{DatabaseSettings, RepositoryConfig, RepositorySource, ServiceSettings};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use factory::{create_repository, MusicRepository};
pub use grpc::GrpcRepository;
pub use postgres::PostgresRepository;
pub use traits::AlbumRepository;

pub use music_core::Album;

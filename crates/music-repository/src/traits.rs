//! Core trait definition for album repositories
//!
//! # Examples
//!
//! ```no_run
//! use music_repository::{AlbumRepository, GrpcRepository, ServiceSettings};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let repo = GrpcRepository::new(ServiceSettings::new("http", "localhost", 50051));
//!
//! for album in repo.get_albums().await? {
//!     println!("{}", album);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use music_core::Album;

use crate::RepositoryResult;

/// Read-only source of albums
///
/// # Implementation Notes
///
/// - The whole catalog is materialized before returning; no streaming
/// - Order of the backing store is preserved
/// - A source with no albums yields an empty `Vec`, never an error
/// - A failed fetch returns an error and no partial results
/// - Implementations may open a connection per call and must not keep
///   mutable state between calls
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Fetch every album from the backing store
    async fn get_albums(&self) -> RepositoryResult<Vec<Album>>;
}

#[async_trait]
impl<T: AlbumRepository + ?Sized> AlbumRepository for Box<T> {
    async fn get_albums(&self) -> RepositoryResult<Vec<Album>> {
        (**self).get_albums().await
    }
}

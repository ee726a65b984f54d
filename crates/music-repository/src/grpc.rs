//! gRPC album repository
//!
//! Calls `MusicService.GetAlbumList` on a remote music service and maps each
//! returned message into an [`Album`].
//!
//! # Endpoint
//!
//! The channel address is `{network}://{host}:{port}` where `network` is
//! `http` (default) or `https`. With `https` the channel uses TLS with the
//! platform's native root certificates.
//!
//! By default a fresh channel is opened for every call. Use
//! [`GrpcRepository::with_channel`] to reuse one.

use async_trait::async_trait;
use music_core::Album;
use std::error::Error as StdError;
use std::time::Duration;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::{debug, info};

use crate::config::ServiceSettings;
use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::AlbumRepository;

use self::pb::music_service_client::MusicServiceClient;

// Include the generated protobuf code
pub mod pb {
    tonic::include_proto!("music.v1");
}

const SECTION: &str = "service";
const BACKEND: &str = "music service";

impl From<pb::Album> for Album {
    fn from(album: pb::Album) -> Self {
        Album::new(album.id, album.title, album.artist, album.price)
    }
}

/// gRPC music service repository
pub struct GrpcRepository {
    settings: ServiceSettings,
    /// Shared channel; `None` means connect per call
    channel: Option<Channel>,
}

impl GrpcRepository {
    /// Create a repository that opens a channel per call using `settings`
    pub fn new(settings: ServiceSettings) -> Self {
        debug!(
            "Music service repository: network={} host={:?} port={:?}",
            settings.network(),
            settings.host,
            settings.port
        );

        Self {
            settings,
            channel: None,
        }
    }

    /// Create a repository that reuses an existing channel
    pub fn with_channel(channel: Channel) -> Self {
        Self {
            settings: ServiceSettings::default(),
            channel: Some(channel),
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Channel address, e.g. `http://localhost:50051`
    pub fn address(&self) -> RepositoryResult<String> {
        let host = match self.settings.host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => host,
            _ => return Err(RepositoryError::missing(SECTION, "host")),
        };
        let port = self
            .settings
            .port
            .ok_or_else(|| RepositoryError::missing(SECTION, "port"))?;

        let network = self.settings.network();
        if network != "http" && network != "https" {
            return Err(RepositoryError::invalid("service.network", network));
        }

        Ok(format!("{}://{}:{}", network, host, port))
    }

    /// Build the channel endpoint from the settings
    pub fn endpoint(&self) -> RepositoryResult<Endpoint> {
        let address = self.address()?;
        let mut endpoint = Endpoint::from_shared(address.clone())
            .map_err(|_| RepositoryError::invalid("service address", address))?;

        if self.settings.network() == "https" {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(|e| RepositoryError::invalid("service.network", describe(&e)))?;
        }

        if let Some(secs) = self.settings.timeout_secs {
            let timeout = Duration::from_secs(secs);
            endpoint = endpoint.connect_timeout(timeout).timeout(timeout);
        }

        Ok(endpoint)
    }

    async fn channel(&self) -> RepositoryResult<Channel> {
        if let Some(channel) = &self.channel {
            return Ok(channel.clone());
        }

        let endpoint = self.endpoint()?;
        debug!("Connecting to music service at {}", endpoint.uri());

        endpoint
            .connect()
            .await
            .map_err(|e| RepositoryError::ConnectionFailure {
                backend: BACKEND,
                message: describe(&e),
            })
    }
}

#[async_trait]
impl AlbumRepository for GrpcRepository {
    async fn get_albums(&self) -> RepositoryResult<Vec<Album>> {
        let mut client = MusicServiceClient::new(self.channel().await?);

        let response = client.get_album_list(pb::GetAlbumsRequest {}).await?;
        let albums: Vec<Album> = response
            .into_inner()
            .albums
            .into_iter()
            .map(Album::from)
            .collect();

        info!("Fetched {} albums from music service", albums.len());
        Ok(albums)
    }
}

/// Flatten an error and its sources into one line
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

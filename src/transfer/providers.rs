use std::fmt;

use async_trait::async_trait;

use crate::types::{SearchCandidate, SourcePlaylist, TrackPage};

/// Errors surfaced by either provider.
///
/// `PlaylistNotFound` is the one case callers are expected to branch on;
/// everything else is transport or response-shape trouble that gets reported
/// as-is. Calls do not retry internally, the caller decides what a failure
/// means for the run.
#[derive(Debug)]
pub enum ProviderError {
    PlaylistNotFound(String),
    Http(reqwest::Error),
    Unexpected(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::PlaylistNotFound(id) => write!(f, "playlist '{}' not found", id),
            ProviderError::Http(e) => write!(f, "http error: {}", e),
            ProviderError::Unexpected(msg) => write!(f, "unexpected provider response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

/// Capability contract for the playlist source.
///
/// `playlist` resolves a playlist id to its metadata and first page of
/// tracks; `tracks_page` follows the opaque `next` locator of a previous
/// page. Pages come back in catalog order and tombstoned entries are
/// preserved as `None` items.
#[async_trait]
pub trait SourceCatalog {
    async fn playlist(&self, playlist_id: &str) -> Result<SourcePlaylist, ProviderError>;

    async fn tracks_page(&self, page_url: &str) -> Result<TrackPage, ProviderError>;
}

/// Capability contract for the destination music service.
///
/// `search` returns candidates in provider relevance order; the transfer
/// core never re-ranks them. `library_track_ids` is the one-time full scan
/// backing duplicate suppression.
#[async_trait]
pub trait MusicDestination {
    async fn create_playlist(&self, name: &str, description: &str)
    -> Result<String, ProviderError>;

    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, ProviderError>;

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        video_ids: &[String],
    ) -> Result<(), ProviderError>;

    async fn library_track_ids(&self) -> Result<Vec<String>, ProviderError>;
}

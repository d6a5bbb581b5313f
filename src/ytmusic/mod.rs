//! # YouTube Music Integration Module
//!
//! This module provides the destination-side interface to the YouTube Music
//! API: playlist creation, track search, playlist mutation, and the full
//! library scan that seeds duplicate suppression. It exposes these
//! capabilities to the transfer core through the [`MusicDestination`] trait.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Transfer Core)
//!          ↓
//! YouTube Music Integration Layer
//!     ├── Playlist Operations (create, add items)
//!     ├── Search (relevance-ordered candidates)
//!     └── Library Scan (paginated, rate-limit aware)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! YouTube Music API
//! ```
//!
//! ## Authentication
//!
//! Unlike the Spotify side there is no interactive flow here: the OAuth
//! token file is provisioned out-of-band and loaded by
//! [`crate::management::YtTokenManager`], which refreshes it against the
//! Google token endpoint when it nears expiry. A missing token file is
//! reported with the expected path before any transfer work starts.
//!
//! ## Error Types
//!
//! All operations return [`crate::transfer::ProviderError`]. Transport
//! failures are propagated without internal retries; only the library scan
//! honors 429 `Retry-After` waits, since it is one-time setup rather than
//! per-track work.

pub mod library;
pub mod playlist;
pub mod search;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    management::YtTokenManager,
    transfer::{MusicDestination, ProviderError},
    types::SearchCandidate,
};

/// Authenticated handle to the YouTube Music API.
///
/// Constructed once at orchestration start, used for every destination
/// mutation and query during the run, dropped at process exit.
pub struct YtMusic {
    client: Client,
    tokens: Mutex<YtTokenManager>,
}

impl YtMusic {
    /// Loads the provisioned token file and builds the client handle.
    pub async fn connect() -> Result<Self, String> {
        let tokens = YtTokenManager::load().await?;
        Ok(Self {
            client: Client::new(),
            tokens: Mutex::new(tokens),
        })
    }

    pub(crate) async fn access_token(&self) -> String {
        self.tokens.lock().await.get_valid_token().await
    }
}

#[async_trait]
impl MusicDestination for YtMusic {
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, ProviderError> {
        self.create(name, description).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, ProviderError> {
        self.search_songs(query).await
    }

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        video_ids: &[String],
    ) -> Result<(), ProviderError> {
        self.add_items(playlist_id, video_ids).await
    }

    async fn library_track_ids(&self) -> Result<Vec<String>, ProviderError> {
        self.scan_library_song_ids().await
    }
}

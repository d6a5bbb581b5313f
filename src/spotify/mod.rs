//! # Spotify Integration Module
//!
//! This module provides the source-side interface to the Spotify Web API:
//! authentication and playlist retrieval. It handles HTTP communication,
//! the OAuth flow, and pagination, and exposes the result to the transfer
//! core through the [`SourceCatalog`] trait.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Transfer Core)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     └── Playlist Operations (metadata, paginated track pages)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements OAuth 2.0 with PKCE (Proof Key for Code Exchange):
//! a cryptographically random verifier, a SHA256 challenge, a browser
//! round-trip through a local callback server, and a token exchange. No
//! client secret is stored or transmitted. Tokens land in the local data
//! directory and are refreshed proactively by
//! [`crate::management::TokenManager`] with a 4-minute expiry buffer.
//!
//! ## Client Handle
//!
//! All API access goes through a [`Spotify`] handle constructed once at
//! startup via [`Spotify::connect`]. The handle owns its `reqwest::Client`
//! and token manager; nothing module-global is mutated.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}` - Playlist metadata with the first track page
//! - `GET <next page URL>` - Follow-up track pages as handed out by the API
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Types
//!
//! Playlist operations return [`crate::transfer::ProviderError`]: a missing
//! playlist maps to `PlaylistNotFound`, transport failures stay
//! `Http(reqwest::Error)` and are propagated without internal retries.

pub mod auth;
pub mod playlist;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    management::TokenManager,
    transfer::{ProviderError, SourceCatalog},
    types::{SourcePlaylist, TrackPage},
};

/// Authenticated handle to the Spotify Web API.
///
/// Constructed once at orchestration start and passed wherever source
/// access is needed. Holds the HTTP client and the token manager; the
/// manager refreshes the access token transparently when it nears expiry.
pub struct Spotify {
    client: Client,
    tokens: Mutex<TokenManager>,
}

impl Spotify {
    /// Loads the cached token and builds the client handle.
    ///
    /// Fails with a descriptive message when no token cache exists yet, in
    /// which case the user has to run `playport auth` first.
    pub async fn connect() -> Result<Self, String> {
        let tokens = TokenManager::load().await?;
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
impl SourceCatalog for Spotify {
    async fn playlist(&self, playlist_id: &str) -> Result<SourcePlaylist, ProviderError> {
        self.fetch_playlist(playlist_id).await
    }

    async fn tracks_page(&self, page_url: &str) -> Result<TrackPage, ProviderError> {
        self.fetch_tracks_page(page_url).await
    }
}

//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. Completes the PKCE flow by exchanging the
//!   authorization code for an access token.
//! - [`health`] - Health check returning application status and version.
//!
//! The endpoints are [Axum](https://docs.rs/axum) handlers wired up in
//! [`crate::server`]. Temporary authentication state is shared with the
//! CLI auth command through an `Arc<Mutex<Option<PkceToken>>>` extension.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

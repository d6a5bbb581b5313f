//! # CLI Module
//!
//! This module provides the command-line interface layer for Playport. It
//! implements the user-facing commands and coordinates between the provider
//! clients, the transfer core, and user interaction.
//!
//! ## Commands
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security. The YouTube Music side uses a provisioned token file and has
//!   no interactive flow.
//! - [`transfer`] - Copies a Spotify playlist into a new YouTube Music
//!   playlist: prompts for the playlist id when none was passed, connects
//!   both providers, runs the transfer core, and prints the summary with an
//!   itemized table of tracks that could not be found.
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Transfer Core (reconciliation, dedup, orchestration)
//!     ↓
//! Provider Layer (Spotify, YouTube Music)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Setup failures (missing tokens, unknown playlist, unreachable provider)
//! terminate with a clear message and a recovery hint. Per-track failures
//! never abort a running transfer; they surface in the running log and the
//! final summary instead.

mod auth;
mod transfer;

pub use auth::auth;
pub use transfer::transfer;

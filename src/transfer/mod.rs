//! # Transfer Core
//!
//! This module implements the cross-catalog reconciliation that moves a
//! playlist from the source provider to the destination provider. It is a
//! pure orchestration layer: all vendor specifics live behind the
//! [`SourceCatalog`] and [`MusicDestination`] traits, which makes the whole
//! core exercisable against in-memory fakes.
//!
//! ## Flow
//!
//! ```text
//! transfer()
//!     ├── fetch_all_tracks()      source pagination, tombstone skip
//!     ├── create_playlist()       destination playlist, fixed description
//!     ├── library_track_ids()     one-time scan → LibraryIndex
//!     └── per track, in order:
//!             resolver::resolve() search → first non-duplicate → add
//! ```
//!
//! Every non-null source track yields exactly one [`TransferOutcome`] and
//! the outcomes keep source order, so the final report is deterministic and
//! auditable. A failing track never stops the run; only setup failures
//! (source fetch, playlist creation, library scan) abort the transfer as a
//! whole.
//!
//! Processing is strictly sequential. The dominant cost is network round
//! trips and both providers rate-limit aggressively, so there is nothing to
//! gain from in-flight overlap; sequencing also keeps the check-then-insert
//! on [`LibraryIndex`] trivially race-free.

mod index;
mod providers;
pub mod resolver;

use std::{fmt, time::Duration};

pub use index::LibraryIndex;
pub use providers::{MusicDestination, ProviderError, SourceCatalog};

use crate::{
    info,
    types::{SourceTrack, TransferOutcome, TransferReport},
    warning,
};

/// Description attached to every playlist this tool creates.
pub const PLAYLIST_DESCRIPTION: &str = "Imported from Spotify";

/// Pause after each successful add mutation. Tunable, not a correctness
/// requirement.
pub const ADD_COOLDOWN: Duration = Duration::from_secs(1);

/// A condition that aborts the whole transfer before or during setup.
/// Per-track trouble never takes this form, it is captured in the report.
#[derive(Debug)]
pub enum TransferError {
    Source(ProviderError),
    PlaylistCreate(ProviderError),
    LibraryScan(ProviderError),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Source(e) => write!(f, "failed to read source playlist: {}", e),
            TransferError::PlaylistCreate(e) => {
                write!(f, "failed to create destination playlist: {}", e)
            }
            TransferError::LibraryScan(e) => {
                write!(f, "failed to scan destination library: {}", e)
            }
        }
    }
}

impl std::error::Error for TransferError {}

/// Fetches the playlist name and its complete track list from the source,
/// following pagination until no `next` locator remains.
///
/// Page order is preserved and tombstoned entries (a page item whose track
/// record is missing) are dropped here with a warning; they produce no
/// outcome downstream.
pub async fn fetch_all_tracks<S>(
    source: &S,
    playlist_id: &str,
) -> Result<(String, Vec<SourceTrack>), ProviderError>
where
    S: SourceCatalog + ?Sized,
{
    let playlist = source.playlist(playlist_id).await?;

    let mut tracks: Vec<SourceTrack> = Vec::new();
    let mut page = playlist.tracks;

    loop {
        for item in page.items {
            match item {
                Some(track) => tracks.push(track),
                None => warning!("Skipping track with no metadata"),
            }
        }

        match page.next {
            Some(next) => page = source.tracks_page(&next).await?,
            None => break,
        }
    }

    Ok((playlist.name, tracks))
}

/// Runs a full playlist transfer and returns the per-track report.
///
/// Creates the destination playlist under the source playlist's name, scans
/// the destination library once to seed duplicate suppression, then resolves
/// every source track sequentially. Outcomes are logged as they happen and
/// collected in source order; not-found tracks are only itemized by the
/// caller at the end.
pub async fn transfer<S, D>(
    source: &S,
    dest: &D,
    playlist_id: &str,
) -> Result<TransferReport, TransferError>
where
    S: SourceCatalog + ?Sized,
    D: MusicDestination + ?Sized,
{
    let (playlist_name, tracks) = fetch_all_tracks(source, playlist_id)
        .await
        .map_err(TransferError::Source)?;
    info!(
        "Fetched {} tracks from source playlist '{}'",
        tracks.len(),
        playlist_name
    );

    let destination_playlist_id = dest
        .create_playlist(&playlist_name, PLAYLIST_DESCRIPTION)
        .await
        .map_err(TransferError::PlaylistCreate)?;
    info!("Created destination playlist '{}'", playlist_name);

    let library_ids = dest
        .library_track_ids()
        .await
        .map_err(TransferError::LibraryScan)?;
    let mut index = LibraryIndex::new(library_ids);
    info!("Destination library holds {} known tracks", index.len());

    let mut outcomes: Vec<TransferOutcome> = Vec::with_capacity(tracks.len());

    for track in tracks {
        let outcome = resolver::resolve(dest, &destination_playlist_id, track, &mut index).await;

        match &outcome {
            TransferOutcome::Added { track, .. } => {
                info!("Added track: {} by {}", track.title, track.artist)
            }
            TransferOutcome::SkippedDuplicate { track } => {
                warning!("Skipped duplicate: '{}' by '{}'", track.title, track.artist)
            }
            TransferOutcome::Failed { track, reason } => {
                warning!(
                    "Error searching/adding track: {} by {}. {}",
                    track.title,
                    track.artist,
                    reason
                )
            }
            TransferOutcome::NotFound { .. } => {}
        }

        outcomes.push(outcome);
    }

    Ok(TransferReport {
        playlist_name,
        destination_playlist_id,
        outcomes,
    })
}

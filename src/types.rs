use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Fallback artist name for source tracks that carry no artist records.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// OAuth token for the YouTube Music side. Provisioned out-of-band (see
/// `management::YtTokenManager`), refreshed with a client secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

// --- Spotify wire types (source side) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
    pub tracks: PlaylistTracksResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItemResponse>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemResponse {
    pub track: Option<PlaylistTrackResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackResponse {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<PlaylistArtistResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistArtistResponse {
    pub name: String,
}

// --- YouTube Music wire types (destination side) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtCreatePlaylistRequest {
    pub title: String,
    pub description: String,
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtCreatePlaylistResponse {
    pub playlist_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtSearchResponse {
    pub items: Vec<YtSearchResultItem>,
}

/// A single search hit. The id and title are optional because the search
/// endpoint mixes shelf entries without a playable id into the result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtSearchResultItem {
    pub video_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtAddPlaylistItemsRequest {
    pub video_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtLibrarySongsResponse {
    pub items: Vec<YtLibrarySong>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtLibrarySong {
    pub video_id: String,
}

// --- Provider-neutral types the transfer core works with ---

/// One track read from the source playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTrack {
    pub source_id: String,
    pub title: String,
    pub artist: String,
}

/// One page of a source playlist. `items` preserves tombstoned entries as
/// `None` so callers can account for them; `next` is the opaque locator of
/// the following page.
#[derive(Debug, Clone)]
pub struct TrackPage {
    pub items: Vec<Option<SourceTrack>>,
    pub next: Option<String>,
}

/// Source playlist metadata together with its first page of tracks.
#[derive(Debug, Clone)]
pub struct SourcePlaylist {
    pub name: String,
    pub tracks: TrackPage,
}

/// A destination search hit in provider rank order. `video_id` is optional:
/// entries without one are malformed for our purposes and get skipped.
#[derive(Debug, Clone)]
pub struct SearchCandidate {
    pub video_id: Option<String>,
    pub title: Option<String>,
}

/// Terminal state of a single source track after resolution.
#[derive(Debug, Clone)]
pub enum TransferOutcome {
    Added { track: SourceTrack, video_id: String },
    SkippedDuplicate { track: SourceTrack },
    NotFound { track: SourceTrack },
    Failed { track: SourceTrack, reason: String },
}

impl TransferOutcome {
    pub fn track(&self) -> &SourceTrack {
        match self {
            TransferOutcome::Added { track, .. } => track,
            TransferOutcome::SkippedDuplicate { track } => track,
            TransferOutcome::NotFound { track } => track,
            TransferOutcome::Failed { track, .. } => track,
        }
    }
}

/// The full result of one transfer run: one outcome per non-null source
/// track, in source order.
#[derive(Debug, Clone)]
pub struct TransferReport {
    pub playlist_name: String,
    pub destination_playlist_id: String,
    pub outcomes: Vec<TransferOutcome>,
}

impl TransferReport {
    pub fn added(&self) -> Vec<(&SourceTrack, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                TransferOutcome::Added { track, video_id } => Some((track, video_id.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn duplicates(&self) -> Vec<&SourceTrack> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                TransferOutcome::SkippedDuplicate { track } => Some(track),
                _ => None,
            })
            .collect()
    }

    pub fn not_found(&self) -> Vec<&SourceTrack> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                TransferOutcome::NotFound { track } => Some(track),
                _ => None,
            })
            .collect()
    }

    pub fn failed(&self) -> Vec<(&SourceTrack, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                TransferOutcome::Failed { track, reason } => Some((track, reason.as_str())),
                _ => None,
            })
            .collect()
    }
}

#[derive(Tabled)]
pub struct NotFoundTableRow {
    pub title: String,
    pub artist: String,
}

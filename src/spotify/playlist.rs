use reqwest::StatusCode;

use crate::{
    config,
    spotify::Spotify,
    transfer::ProviderError,
    types::{
        PlaylistResponse, PlaylistTrackResponse, PlaylistTracksResponse, SourcePlaylist,
        SourceTrack, TrackPage, UNKNOWN_ARTIST,
    },
};

impl Spotify {
    /// Retrieves a playlist's metadata and its first page of tracks.
    ///
    /// A 404 from the API becomes `ProviderError::PlaylistNotFound`; other
    /// HTTP-level failures are propagated as-is so the caller can decide
    /// whether the run survives them.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify ID of the playlist to fetch
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(SourcePlaylist)` - Playlist name plus the first track page
    /// - `Err(ProviderError)` - Unknown playlist, network or API error
    ///
    /// # Pagination
    ///
    /// The returned page carries the absolute URL of the next page when more
    /// tracks exist; feed it to [`Spotify::fetch_tracks_page`] until it comes
    /// back as `None`.
    ///
    /// # Example
    ///
    /// ```
    /// let spotify = Spotify::connect().await?;
    /// let playlist = spotify.fetch_playlist("37i9dQZF1DXcBWIGoYBM5M").await?;
    /// println!("{} tracks on first page", playlist.tracks.items.len());
    /// ```
    pub async fn fetch_playlist(&self, playlist_id: &str) -> Result<SourcePlaylist, ProviderError> {
        let token = self.access_token().await;
        let api_url = format!(
            "{uri}/playlists/{id}",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        );

        let response = self.client.get(&api_url).bearer_auth(&token).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::PlaylistNotFound(playlist_id.to_string()));
        }

        let response = response.error_for_status()?;
        let json = response.json::<PlaylistResponse>().await?;

        Ok(SourcePlaylist {
            name: json.name,
            tracks: track_page(json.tracks),
        })
    }

    /// Fetches a follow-up track page via the absolute `next` URL handed out
    /// by the previous page.
    pub async fn fetch_tracks_page(&self, page_url: &str) -> Result<TrackPage, ProviderError> {
        let token = self.access_token().await;

        let response = self
            .client
            .get(page_url)
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?;
        let json = response.json::<PlaylistTracksResponse>().await?;

        Ok(track_page(json))
    }
}

/// Converts a wire-level track page into the provider-neutral shape the
/// transfer core consumes. Tombstoned items stay `None`.
pub fn track_page(response: PlaylistTracksResponse) -> TrackPage {
    TrackPage {
        items: response
            .items
            .into_iter()
            .map(|item| item.track.map(source_track))
            .collect(),
        next: response.next,
    }
}

fn source_track(track: PlaylistTrackResponse) -> SourceTrack {
    let artist = track
        .artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    SourceTrack {
        source_id: track.id.unwrap_or_default(),
        title: track.name,
        artist,
    }
}

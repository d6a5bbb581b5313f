use crate::{
    config,
    transfer::ProviderError,
    types::{YtAddPlaylistItemsRequest, YtCreatePlaylistRequest, YtCreatePlaylistResponse},
    ytmusic::YtMusic,
};

impl YtMusic {
    /// Creates a private playlist and returns its id.
    ///
    /// # Arguments
    ///
    /// * `name` - Title for the new playlist
    /// * `description` - Descriptive note shown under the playlist
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(String)` - Id of the created playlist
    /// - `Err(ProviderError)` - Network error, API error, or HTTP error
    pub async fn create(&self, name: &str, description: &str) -> Result<String, ProviderError> {
        let token = self.access_token().await;
        let api_url = format!("{uri}/playlists", uri = &config::ytmusic_apiurl());

        let body = YtCreatePlaylistRequest {
            title: name.to_string(),
            description: description.to_string(),
            privacy_status: "PRIVATE".to_string(),
        };

        let response = self
            .client
            .post(&api_url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<YtCreatePlaylistResponse>().await?;
        if json.playlist_id.is_empty() {
            return Err(ProviderError::Unexpected(
                "playlist create returned an empty id".to_string(),
            ));
        }

        Ok(json.playlist_id)
    }

    /// Appends tracks to an existing playlist, preserving the given order.
    pub async fn add_items(
        &self,
        playlist_id: &str,
        video_ids: &[String],
    ) -> Result<(), ProviderError> {
        let token = self.access_token().await;
        let api_url = format!(
            "{uri}/playlists/{id}/items",
            uri = &config::ytmusic_apiurl(),
            id = playlist_id
        );

        let body = YtAddPlaylistItemsRequest {
            video_ids: video_ids.to_vec(),
        };

        self.client
            .post(&api_url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

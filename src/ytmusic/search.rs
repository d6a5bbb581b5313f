use crate::{
    config,
    transfer::ProviderError,
    types::{SearchCandidate, YtSearchResponse},
    ytmusic::YtMusic,
};

impl YtMusic {
    /// Searches the catalog for songs matching the query.
    ///
    /// Results come back in the provider's relevance order and are handed
    /// on unchanged; entries without a video id are kept so the caller can
    /// decide how to treat them. Transport failures are propagated
    /// immediately, there is no retry at this level.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query, passed through verbatim
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<SearchCandidate>)` - Candidates in relevance order, best first
    /// - `Err(ProviderError)` - Network error, API error, or HTTP error
    pub async fn search_songs(&self, query: &str) -> Result<Vec<SearchCandidate>, ProviderError> {
        let token = self.access_token().await;
        let api_url = format!("{uri}/search", uri = &config::ytmusic_apiurl());

        let response = self
            .client
            .get(&api_url)
            .query(&[("q", query), ("type", "song")])
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<YtSearchResponse>().await?;

        Ok(json
            .items
            .into_iter()
            .map(|item| SearchCandidate {
                video_id: item.video_id,
                title: item.title,
            })
            .collect())
    }
}

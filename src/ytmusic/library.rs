use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{
    config, transfer::ProviderError, types::YtLibrarySongsResponse, warning, ytmusic::YtMusic,
};

impl YtMusic {
    /// Scans the account's full song library and returns every video id.
    ///
    /// Walks the paginated library endpoint until no page token remains,
    /// concatenating ids in page order. Runs once per transfer to seed the
    /// duplicate-suppression index.
    ///
    /// # Rate Limiting
    ///
    /// This is the heaviest read of a run, so 429 responses are handled
    /// here by honoring the `Retry-After` header for delays up to 120
    /// seconds before re-requesting the same page. Longer delays produce a
    /// warning and the error is propagated.
    ///
    /// # Progress Indication
    ///
    /// Displays a spinner with a running page count while the scan is in
    /// progress. The spinner is cleared on all exit paths.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<String>)` - Every library song's video id
    /// - `Err(ProviderError)` - Network error, API error, or HTTP error
    pub async fn scan_library_song_ids(&self) -> Result<Vec<String>, ProviderError> {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Scanning YouTube Music library...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let api_url = format!("{uri}/library/songs", uri = &config::ytmusic_apiurl());

        let mut ids: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let token = self.access_token().await;

            let mut request = self.client.get(&api_url).bearer_auth(&token);
            if let Some(ref page) = page_token {
                request = request.query(&[("pageToken", page.as_str())]);
            }

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(err.into());
                }
            };

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // re-request the same page
                }

                warning!(
                    "Retry after has reached a abnormal high of {} seconds. Try your best tommorrow again.",
                    retry_after
                );
            }

            let response = match response.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(err.into());
                }
            };

            let json = match response.json::<YtLibrarySongsResponse>().await {
                Ok(json) => json,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(err.into());
                }
            };

            ids.extend(json.items.into_iter().map(|song| song.video_id));
            pages += 1;
            pb.set_message(format!(
                "Scanning YouTube Music library... ({} songs, {} pages)",
                ids.len(),
                pages
            ));

            match json.next_page_token {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        pb.finish_and_clear();
        Ok(ids)
    }
}

use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{config, types::YtToken};

/// Manages the YouTube Music OAuth token.
///
/// There is no interactive flow on this side: the token file is provisioned
/// out-of-band (e.g. copied from an existing OAuth setup) and only refreshed
/// here. Refreshing goes through the Google token endpoint and, unlike the
/// Spotify PKCE flow, requires the client secret.
pub struct YtTokenManager {
    token: YtToken,
}

impl YtTokenManager {
    pub fn new(token: YtToken) -> Self {
        YtTokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path).await.map_err(|e| {
            format!(
                "cannot read YouTube Music token at {}: {}",
                path.display(),
                e
            )
        })?;
        let token: YtToken = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = self.refresh_token().await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    async fn refresh_token(&self) -> Result<YtToken, String> {
        let client = Client::new();
        let res = client
            .post(&config::ytmusic_apitoken_url())
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", &self.token.refresh_token),
                ("client_id", &config::ytmusic_client_id()),
                ("client_secret", &config::ytmusic_client_secret()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

        Ok(YtToken {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            // Google keeps the refresh token stable across refreshes
            refresh_token: json["refresh_token"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| self.token.refresh_token.clone()),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("playport/cache/ytmusic-token.json");
        path
    }
}

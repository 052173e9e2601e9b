use super::provider::{ProviderTokenResponse, TokenProvider, TokenProviderError};
use crate::infrastructure::config::SpotifyCredentials;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::AUTHORIZATION;
use std::time::Duration;

/// Build the `Authorization` value for client authentication: `Basic base64(id:secret)`
pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Spotify accounts service client for the refresh-token grant
pub struct SpotifyTokenClient {
    token_url: String,
    http_client: reqwest::Client,
}

impl SpotifyTokenClient {
    pub fn new(token_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            token_url,
            http_client,
        })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[async_trait]
impl TokenProvider for SpotifyTokenClient {
    async fn refresh_access_token(
        &self,
        credentials: &SpotifyCredentials,
    ) -> Result<ProviderTokenResponse, TokenProviderError> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ];

        tracing::info!(token_url = %self.token_url, "Requesting token from Spotify API");

        // .form() sets Content-Type: application/x-www-form-urlencoded
        let response = self
            .http_client
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                basic_authorization(&credentials.client_id, &credentials.client_secret),
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| TokenProviderError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Spotify token response status");

        let body = response
            .text()
            .await
            .map_err(|e| TokenProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(TokenProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<ProviderTokenResponse>(&body)
            .map_err(|e| TokenProviderError::Decode(format!("Failed to parse token response: {}", e)))
    }
}

use chrono::Utc;
use std::sync::Arc;

use super::{AccessTokenResponse, DiagnosticResponse, OriginReport, TokenServiceError};
use super::dto::DIAGNOSTIC_MESSAGE;
use crate::infrastructure::config::{CredentialPresence, SpotifyCredentials};
use crate::infrastructure::oauth::TokenProvider;

pub struct TokenRelayService {
    provider: Arc<dyn TokenProvider>,
    credentials: SpotifyCredentials,
}

impl TokenRelayService {
    pub fn new(provider: Arc<dyn TokenProvider>, credentials: SpotifyCredentials) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    pub fn credential_presence(&self) -> CredentialPresence {
        self.credentials.presence()
    }

    /// Exchange the configured refresh token for a fresh access token.
    ///
    /// Fails fast without touching the provider when any credential is empty.
    pub async fn refresh(&self) -> Result<AccessTokenResponse, TokenServiceError> {
        let presence = self.credential_presence();
        tracing::info!(
            has_client_id = presence.has_client_id,
            has_client_secret = presence.has_client_secret,
            has_refresh_token = presence.has_refresh_token,
            "Environment variables check"
        );

        if !self.credentials.is_complete() {
            return Err(TokenServiceError::MissingCredentials);
        }

        let token = self
            .provider
            .refresh_access_token(&self.credentials)
            .await?;

        tracing::info!(expires_in = token.expires_in, "Successfully obtained access token");

        Ok(AccessTokenResponse {
            access_token: token.access_token,
            expires_in: token.expires_in,
        })
    }

    /// Status payload for GET requests. Reports presence only, never values.
    pub fn diagnostics(&self, origins: Option<OriginReport>) -> DiagnosticResponse {
        DiagnosticResponse {
            message: DIAGNOSTIC_MESSAGE.to_string(),
            origins,
            env_check: self.credential_presence().into(),
            timestamp: Utc::now(),
        }
    }
}

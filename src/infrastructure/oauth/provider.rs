use crate::infrastructure::config::SpotifyCredentials;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Successful reply from the token endpoint.
///
/// Only the fields the relay forwards are decoded; `token_type`, `scope` and
/// anything else the provider adds are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderTokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenProviderError {
    /// The provider answered with a non-success status
    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
    /// Connection, timeout or body read failure
    #[error("{0}")]
    Transport(String),
    /// Success status but the body was not a usable token response
    #[error("{0}")]
    Decode(String),
}

/// Exchanges a refresh token for an access token.
/// Abstracts the OAuth provider so the refresh flow can run against a fake.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Perform exactly one refresh-token grant request.
    ///
    /// # Errors
    /// Returns [`TokenProviderError::Rejected`] for non-2xx replies, and
    /// `Transport`/`Decode` for everything else. Implementations never retry.
    async fn refresh_access_token(
        &self,
        credentials: &SpotifyCredentials,
    ) -> Result<ProviderTokenResponse, TokenProviderError>;
}

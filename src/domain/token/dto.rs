use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::infrastructure::config::CredentialPresence;

pub const DIAGNOSTIC_MESSAGE: &str =
    "Spotify API endpoint is working. Please use POST method for authentication.";

/// Response for POST /api/spotify
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Response for GET /api/spotify
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticResponse {
    pub message: String,
    #[serde(flatten)]
    pub origins: Option<OriginReport>,
    pub env_check: EnvCheck,
    pub timestamp: DateTime<Utc>,
}

/// Allow-list and caller origin, only reported when diagnostics are configured to
#[derive(Debug, Serialize, Deserialize)]
pub struct OriginReport {
    pub allowed_origins: Vec<String>,
    pub request_origin: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EnvCheck {
    pub has_client_id: bool,
    pub has_client_secret: bool,
    pub has_refresh_token: bool,
}

impl From<CredentialPresence> for EnvCheck {
    fn from(presence: CredentialPresence) -> Self {
        Self {
            has_client_id: presence.has_client_id,
            has_client_secret: presence.has_client_secret,
            has_refresh_token: presence.has_refresh_token,
        }
    }
}

use serde::Deserialize;
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Origins allowed to call the relay when `CORS_ALLOWED_ORIGINS` is unset
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://mattwhalley.com",
    "https://www.mattwhalley.com",
    "https://mttwhlly.github.io",
    "http://localhost:4321",
    "http://127.0.0.1:4321",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Spotify
    pub credentials: SpotifyCredentials,
    pub token_url: String,
    pub request_timeout: Duration,
    // CORS
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
    pub diagnostics_include_origins: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {key}={value}")]
    Invalid { key: &'static str, value: String },
}

/// Spotify app credentials plus the refresh token being exchanged.
///
/// Values may be empty: a missing credential is reported per request rather
/// than at start-up, so `Debug` never prints them.
#[derive(Clone, Default, PartialEq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// Which credentials are configured, without their values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPresence {
    pub has_client_id: bool,
    pub has_client_secret: bool,
    pub has_refresh_token: bool,
}

impl SpotifyCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    pub fn presence(&self) -> CredentialPresence {
        CredentialPresence {
            has_client_id: !self.client_id.is_empty(),
            has_client_secret: !self.client_secret.is_empty(),
            has_refresh_token: !self.refresh_token.is_empty(),
        }
    }

    pub fn is_complete(&self) -> bool {
        let presence = self.presence();
        presence.has_client_id && presence.has_client_secret && presence.has_refresh_token
    }
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let presence = self.presence();
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &redacted(presence.has_client_id))
            .field("client_secret", &redacted(presence.has_client_secret))
            .field("refresh_token", &redacted(presence.has_refresh_token))
            .finish()
    }
}

fn redacted(present: bool) -> &'static str {
    if present {
        "<redacted>"
    } else {
        "<missing>"
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", "8080")?,
            environment: match env_or("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env_or("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            credentials: SpotifyCredentials::new(
                env_or("SPOTIFY_CLIENT_ID", ""),
                env_or("SPOTIFY_CLIENT_SECRET", ""),
                env_or("SPOTIFY_REFRESH_TOKEN", ""),
            ),
            token_url: env_or("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL),
            request_timeout: parse_timeout(&env_or("SPOTIFY_TIMEOUT_SECS", "10"))?,
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| default_allowed_origins()),
            allow_credentials: parse_flag(&env_or("CORS_ALLOW_CREDENTIALS", "true")),
            diagnostics_include_origins: parse_flag(&env_or(
                "DIAGNOSTICS_INCLUDE_ORIGINS",
                "false",
            )),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

pub fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Outbound timeout in whole seconds; zero would fail every token request
pub fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            key: "SPOTIFY_TIMEOUT_SECS",
            value: value.to_string(),
        }),
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env_or(key, default);
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use spotify_token_relay::controllers::token::TokenController;
use spotify_token_relay::domain::token::TokenRelayService;
use spotify_token_relay::infrastructure::config::{Config, LogFormat};
use spotify_token_relay::infrastructure::cors::CorsPolicy;
use spotify_token_relay::infrastructure::http::{build_router, start_http_server};
use spotify_token_relay::infrastructure::oauth::SpotifyTokenClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Spotify token relay on {}:{}",
        config.host,
        config.port
    );

    // Log which credentials are configured (never their values)
    let presence = config.credentials.presence();
    tracing::info!(
        has_client_id = presence.has_client_id,
        has_client_secret = presence.has_client_secret,
        has_refresh_token = presence.has_refresh_token,
        "Spotify credentials environment check"
    );

    if !config.credentials.is_complete() {
        tracing::warn!("Spotify credentials incomplete. POST requests will fail with 'Missing credentials' until they are set.");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the token endpoint client
    let spotify_client = Arc::new(SpotifyTokenClient::new(
        config.token_url.clone(),
        config.request_timeout,
    )?);
    tracing::info!(
        token_url = spotify_client.token_url(),
        timeout_secs = config.request_timeout.as_secs(),
        "Spotify token client initialized"
    );

    // 2. Instantiate services
    let token_service = Arc::new(TokenRelayService::new(
        spotify_client,
        config.credentials.clone(),
    ));

    // 3. CORS policy
    let cors_policy = Arc::new(CorsPolicy::new(
        config.allowed_origins.clone(),
        config.allow_credentials,
    ));
    tracing::info!(
        origins = ?cors_policy.allowed_origins(),
        allow_credentials = config.allow_credentials,
        "CORS configured with {} allowed origins",
        cors_policy.allowed_origins().len()
    );

    // 4. Instantiate controllers
    let token_controller = Arc::new(TokenController::new(
        token_service,
        cors_policy.clone(),
        config.diagnostics_include_origins,
    ));

    let app = build_router(token_controller, cors_policy);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "spotify_token_relay=debug,tower_http=debug"
    } else {
        "spotify_token_relay=info,tower_http=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

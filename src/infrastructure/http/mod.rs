pub mod request_id;

use axum::{middleware, routing::{any, get}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, token::TokenController};
use crate::infrastructure::config::Config;
use crate::infrastructure::cors::{cors_middleware, CorsPolicy};

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Path the token relay is mounted on
pub const TOKEN_ROUTE: &str = "/api/spotify";

/// Assemble the application router with its middleware stack
pub fn build_router(token_controller: Arc<TokenController>, cors_policy: Arc<CorsPolicy>) -> Router {
    // All methods reach the controller so unsupported ones get the JSON 405 body
    let token_routes = Router::new()
        .route(TOKEN_ROUTE, any(TokenController::handle))
        .with_state(token_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(token_routes)
        .layer(middleware::from_fn_with_state(cors_policy, cors_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: Arc<Config>, app: Router) -> Result<(), std::io::Error> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health - liveness probe, independent of Spotify credentials
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

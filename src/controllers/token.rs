use axum::{
    extract::State,
    http::{header::ORIGIN, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::token::{OriginReport, TokenRelayService},
    error::{AppError, AppResult},
    infrastructure::cors::CorsPolicy,
};

pub struct TokenController {
    token_service: Arc<TokenRelayService>,
    cors_policy: Arc<CorsPolicy>,
    diagnostics_include_origins: bool,
}

impl TokenController {
    pub fn new(
        token_service: Arc<TokenRelayService>,
        cors_policy: Arc<CorsPolicy>,
        diagnostics_include_origins: bool,
    ) -> Self {
        Self {
            token_service,
            cors_policy,
            diagnostics_include_origins,
        }
    }

    /// /api/spotify - every method lands here and is dispatched by hand
    ///
    /// - OPTIONS: preflight, empty 200
    /// - POST: refresh the access token
    /// - GET: credential presence diagnostics
    /// - anything else: 405
    pub async fn handle(
        State(controller): State<Arc<TokenController>>,
        method: Method,
        headers: HeaderMap,
    ) -> AppResult<Response> {
        let origin = headers
            .get(ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        match method {
            Method::OPTIONS => Ok(StatusCode::OK.into_response()),
            Method::POST => controller.refresh(origin).await,
            Method::GET => Ok(controller.diagnostics(origin)),
            _ => Err(AppError::MethodNotAllowed),
        }
    }

    async fn refresh(&self, origin: Option<String>) -> AppResult<Response> {
        tracing::info!(origin = ?origin, "Spotify API endpoint hit");

        let token = self.token_service.refresh().await?;
        Ok(Json(token).into_response())
    }

    fn diagnostics(&self, origin: Option<String>) -> Response {
        let origins = self.diagnostics_include_origins.then(|| OriginReport {
            allowed_origins: self.cors_policy.allowed_origins().to_vec(),
            request_origin: origin,
        });

        Json(self.token_service.diagnostics(origins)).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MISSING_CREDENTIALS_DETAILS: &str =
    "One or more required environment variables are missing";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only GET and POST methods are supported";

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Token request failed with status {status}")]
    TokenRequestFailed { status: u16, body: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Error envelope shared by every failure path
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredentials
            | Self::TokenRequestFailed { .. }
            | Self::AuthenticationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::MissingCredentials => ErrorResponse {
                error: "Missing credentials".to_string(),
                message: None,
                status: None,
                details: Some(MISSING_CREDENTIALS_DETAILS.to_string()),
            },
            Self::TokenRequestFailed { status, body } => ErrorResponse {
                error: "Token request failed".to_string(),
                message: None,
                status: Some(*status),
                details: Some(body.clone()),
            },
            Self::AuthenticationFailed(details) => ErrorResponse {
                error: "Authentication failed".to_string(),
                message: None,
                status: None,
                details: Some(details.clone()),
            },
            Self::MethodNotAllowed => ErrorResponse {
                error: "Method not allowed".to_string(),
                message: Some(METHOD_NOT_ALLOWED_MESSAGE.to_string()),
                status: None,
                details: None,
            },
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status.as_u16(), "Request rejected");
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

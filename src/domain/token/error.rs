use crate::error::AppError;
use crate::infrastructure::oauth::TokenProviderError;

#[derive(Debug, thiserror::Error)]
pub enum TokenServiceError {
    #[error("missing credentials")]
    MissingCredentials,
    #[error("token request rejected with status {status}")]
    Rejected { status: u16, body: String },
    #[error("{0}")]
    Unexpected(String),
}

impl From<TokenProviderError> for TokenServiceError {
    fn from(err: TokenProviderError) -> Self {
        match err {
            TokenProviderError::Rejected { status, body } => {
                TokenServiceError::Rejected { status, body }
            }
            TokenProviderError::Transport(msg) | TokenProviderError::Decode(msg) => {
                TokenServiceError::Unexpected(msg)
            }
        }
    }
}

impl From<TokenServiceError> for AppError {
    fn from(err: TokenServiceError) -> Self {
        match err {
            TokenServiceError::MissingCredentials => AppError::MissingCredentials,
            TokenServiceError::Rejected { status, body } => {
                AppError::TokenRequestFailed { status, body }
            }
            TokenServiceError::Unexpected(msg) => AppError::AuthenticationFailed(msg),
        }
    }
}

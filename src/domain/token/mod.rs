pub mod dto;
pub mod error;
pub mod service;

pub use dto::{AccessTokenResponse, DiagnosticResponse, EnvCheck, OriginReport};
pub use error::TokenServiceError;
pub use service::TokenRelayService;

pub mod provider;
pub mod spotify;

pub use provider::{ProviderTokenResponse, TokenProvider, TokenProviderError};
pub use spotify::{basic_authorization, SpotifyTokenClient};

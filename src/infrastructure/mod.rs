pub mod config;
pub mod cors;
pub mod http;
pub mod oauth;

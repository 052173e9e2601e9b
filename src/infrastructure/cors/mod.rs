use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use std::sync::Arc;

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Allow-list CORS policy.
///
/// A listed origin is echoed back verbatim; anything else gets no
/// `Access-Control-Allow-Origin` at all. There is no wildcard.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    lookup: HashSet<String>,
    allow_credentials: bool,
}

impl CorsPolicy {
    pub fn new<I, S>(allowed_origins: I, allow_credentials: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed_origins: Vec<String> = allowed_origins.into_iter().map(Into::into).collect();
        let lookup = allowed_origins.iter().cloned().collect();

        Self {
            allowed_origins,
            lookup,
            allow_credentials,
        }
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.lookup.contains(origin)
    }

    /// Set the CORS response headers for a request from `origin`
    pub fn apply(&self, origin: Option<&str>, headers: &mut HeaderMap) {
        if let Some(origin) = origin.filter(|o| self.is_allowed(o)) {
            if let Ok(value) = HeaderValue::from_str(origin) {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
        }

        // The grant depends on Origin whether or not one was given
        headers.append(VARY, HeaderValue::from_static("Origin"));

        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );

        if self.allow_credentials {
            headers.insert(
                ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
    }
}

/// Middleware adding CORS headers to every response, errors included
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;
    policy.apply(origin.as_deref(), response.headers_mut());

    response
}

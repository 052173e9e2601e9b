use serde_json::Value;
use std::collections::HashMap;

pub fn assert_token_response(response: &Value, expected_token: &str, expected_expires_in: u64) {
    let fields = response.as_object().expect("Token response should be an object");
    assert_eq!(fields.len(), 2, "Only access_token and expires_in may be forwarded: {:?}", fields);
    assert_eq!(
        response.get("access_token").and_then(|v| v.as_str()),
        Some(expected_token)
    );
    assert_eq!(
        response.get("expires_in").and_then(|v| v.as_u64()),
        Some(expected_expires_in)
    );
}

pub fn assert_env_check(response: &Value, client_id: bool, client_secret: bool, refresh_token: bool) {
    let env_check = response.get("env_check").expect("Missing env_check");
    assert_eq!(env_check.get("has_client_id").and_then(|v| v.as_bool()), Some(client_id));
    assert_eq!(
        env_check.get("has_client_secret").and_then(|v| v.as_bool()),
        Some(client_secret)
    );
    assert_eq!(
        env_check.get("has_refresh_token").and_then(|v| v.as_bool()),
        Some(refresh_token)
    );
}

/// Headers every response carries regardless of origin
pub fn assert_static_cors_headers(headers: &HashMap<String, String>) {
    assert_eq!(
        headers.get("access-control-allow-methods").map(String::as_str),
        Some("GET, POST, OPTIONS")
    );
    assert_eq!(
        headers.get("access-control-allow-headers").map(String::as_str),
        Some("Content-Type, Authorization")
    );
}

use crate::e2e::helpers;

use helpers::api_client::TOKEN_ENDPOINT;
use helpers::assertions::assert_static_cors_headers;
use helpers::{TestContext, TOKEN_PATH};
use hyper::Method;
use serde_json::json;
use test_context::test_context;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

const ALL_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::OPTIONS,
    Method::PUT,
    Method::DELETE,
];

async fn mount_token_endpoint(ctx: &TestContext) {
    Mock::given(method("POST"))
        .and(wiremock::matchers::path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "abc123", "expires_in": 3600})),
        )
        .mount(&ctx.spotify)
        .await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_allowed_origin_for_every_method(ctx: &TestContext) {
    mount_token_endpoint(ctx).await;

    for method in ALL_METHODS {
        let response = ctx
            .client
            .request_from(method.clone(), TOKEN_ENDPOINT, "https://mattwhalley.com")
            .await
            .unwrap();

        response
            .assert_header("access-control-allow-origin", "https://mattwhalley.com")
            .assert_header("access-control-allow-credentials", "true")
            .assert_header("vary", "Origin");
        assert_static_cors_headers(&response.headers);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_grant_unlisted_origin_for_any_method(ctx: &TestContext) {
    mount_token_endpoint(ctx).await;

    for method in ALL_METHODS {
        let response = ctx
            .client
            .request_from(method.clone(), TOKEN_ENDPOINT, "https://evil.example")
            .await
            .unwrap();

        response
            .assert_header_missing("access-control-allow-origin")
            .assert_header("vary", "Origin");
        assert_static_cors_headers(&response.headers);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_still_serve_unlisted_origin(ctx: &TestContext) {
    mount_token_endpoint(ctx).await;

    // Enforcement is the browser's job; the server still answers
    let response = ctx
        .client
        .request_from(Method::POST, TOKEN_ENDPOINT, "https://evil.example")
        .await
        .unwrap();

    response
        .assert_status(hyper::StatusCode::OK)
        .assert_header_missing("access-control-allow-origin");
    assert!(response.body.is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_grant_requests_without_origin(ctx: &TestContext) {
    let response = ctx.client.get(TOKEN_ENDPOINT).await.unwrap();

    response
        .assert_header_missing("access-control-allow-origin")
        .assert_header("vary", "Origin");
    assert_static_cors_headers(&response.headers);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_every_default_origin(ctx: &TestContext) {
    for origin in [
        "https://mattwhalley.com",
        "https://www.mattwhalley.com",
        "https://mttwhlly.github.io",
        "http://localhost:4321",
        "http://127.0.0.1:4321",
    ] {
        let response = ctx
            .client
            .request_from(Method::OPTIONS, TOKEN_ENDPOINT, origin)
            .await
            .unwrap();

        response.assert_header("access-control-allow-origin", origin);
    }
}

#[tokio::test]
async fn it_should_restrict_to_single_origin_allow_list() {
    let ctx = TestContext::with_config(|config| {
        config.allowed_origins = vec!["https://mattwhalley.com".to_string()];
    })
    .await
    .unwrap();

    let allowed = ctx
        .client
        .request_from(Method::OPTIONS, TOKEN_ENDPOINT, "https://mattwhalley.com")
        .await
        .unwrap();
    allowed.assert_header("access-control-allow-origin", "https://mattwhalley.com");

    let formerly_allowed = ctx
        .client
        .request_from(Method::OPTIONS, TOKEN_ENDPOINT, "http://localhost:4321")
        .await
        .unwrap();
    formerly_allowed.assert_header_missing("access-control-allow-origin");
}

#[tokio::test]
async fn it_should_omit_credentials_header_when_disabled() {
    let ctx = TestContext::with_config(|config| {
        config.allow_credentials = false;
    })
    .await
    .unwrap();

    let response = ctx
        .client
        .request_from(Method::OPTIONS, TOKEN_ENDPOINT, "https://mattwhalley.com")
        .await
        .unwrap();

    response
        .assert_header("access-control-allow-origin", "https://mattwhalley.com")
        .assert_header_missing("access-control-allow-credentials");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_cors_to_error_responses(ctx: &TestContext) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&ctx.spotify)
        .await;

    let response = ctx
        .client
        .request_from(Method::POST, TOKEN_ENDPOINT, "https://mattwhalley.com")
        .await
        .unwrap();

    response
        .assert_status(hyper::StatusCode::INTERNAL_SERVER_ERROR)
        .assert_header("access-control-allow-origin", "https://mattwhalley.com");
}

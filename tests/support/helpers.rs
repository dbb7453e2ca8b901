// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::COOKIE};
use axum::response::Response;
use corporate_site::application::mapping::MediaUrlResolver;
use corporate_site::application::ports::content_source::ContentSource;
use corporate_site::application::seo::SiteProfile;
use corporate_site::application::services::ApplicationServices;
use corporate_site::presentation::http::{routes, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks;

pub const TEST_PREVIEW_SECRET: &str = "preview-secret";
pub const TEST_SITE_URL: &str = "https://www.example.test";
pub const TEST_SITE_NAME: &str = "Example Corp";

pub fn build_test_state(
    content: Arc<dyn ContentSource>,
    preview_secret: Option<&str>,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        content,
        MediaUrlResolver::new(mocks::SAMPLE_MEDIA_BASE),
        SiteProfile::new(TEST_SITE_NAME, TEST_SITE_URL),
        preview_secret.map(str::to_string),
    ));

    HttpState {
        services,
        allowed_origins: vec!["http://localhost:3000".to_string()].into(),
    }
}

/// 標準のテストデータとプレビューシークレットを持つルーター
pub fn make_test_router() -> Router {
    make_test_router_with(Arc::new(mocks::sample_content()))
}

pub fn make_test_router_with(content: Arc<dyn ContentSource>) -> Router {
    let state = build_test_state(content, Some(TEST_PREVIEW_SECRET));
    routes::build_router_with_rate_limiter(state, false)
}

/// プレビューシークレット未設定のルーター
pub fn make_test_router_without_secret() -> Router {
    let state = build_test_state(Arc::new(mocks::sample_content()), None);
    routes::build_router_with_rate_limiter(state, false)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn get_in_draft_mode(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(COOKIE, "theme=dark; draft_mode=1")
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// Asserts a 200 JSON response and returns its body.
pub async fn read_json(resp: Response) -> Value {
    assert_eq!(resp.status(), StatusCode::OK);
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Read an error body after checking its status.
pub async fn read_error_json(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body for error")
}

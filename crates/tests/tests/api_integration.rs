use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use paisa_api::build_app;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_public() {
    let app = build_app().expect("app should build");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn respond_requires_api_key() {
    let app = build_app().expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": "hello" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn respond_returns_the_matched_reply() {
    let app = build_app().expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-paisa-key")
        .body(Body::from(json!({ "text": "hello" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed["reply_text"], "Hello!");
    assert_eq!(parsed["matched"], true);
}

#[tokio::test]
async fn unmatched_input_falls_back() {
    let app = build_app().expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-paisa-key")
        .body(Body::from(
            json!({ "text": "xyz completely unmatched gibberish" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed["matched"], false);
    assert_eq!(parsed["reply_text"], paisa_core::DEFAULT_FALLBACK);
}

#[tokio::test]
async fn overlong_text_is_rejected() {
    let app = build_app().expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-paisa-key")
        .body(Body::from(
            json!({ "text": "a".repeat(4_000) }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

//! Chat streaming API integration tests
//!
//! Tests for /api/claude-stream. No upstream credential is configured in the
//! test state, so any session open fails fast and the gateway's terminal
//! error frame path is exercised without a network.

use actix_web::{http::StatusCode, test};
use serde_json::json;

use crate::test_app;

#[actix_web::test]
async fn test_empty_message_is_rejected_before_streaming() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/claude-stream")
        .set_json(json!({ "message": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Message is required");
}

#[actix_web::test]
async fn test_whitespace_message_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/claude-stream")
        .set_json(json!({ "message": "   \n\t" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_stream_headers_and_terminal_error_frame() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/claude-stream")
        .set_json(json!({ "message": "hello", "mode": "code" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/event-stream"
    );
    assert_eq!(resp.headers().get("cache-control").unwrap(), "no-cache");

    // Without a credential the session cannot open; the stream must still
    // deliver exactly one well-formed terminal error frame
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    let frames: Vec<&str> = text
        .split("\n\n")
        .filter(|chunk| !chunk.is_empty())
        .collect();
    assert_eq!(frames.len(), 1);

    let payload: serde_json::Value =
        serde_json::from_str(frames[0].strip_prefix("data: ").unwrap()).unwrap();
    assert!(payload["error"].is_string());
}

#[actix_web::test]
async fn test_unknown_mode_falls_back_to_chat() {
    let app = test_app!();

    // An unrecognized mode must not fail validation
    let req = test::TestRequest::post()
        .uri("/api/claude-stream")
        .set_json(json!({ "message": "hi", "mode": "poetry" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

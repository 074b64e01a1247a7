//! User API integration tests
//!
//! Tests for /api/users endpoints

use actix_web::{http::StatusCode, test};
use serde_json::json;

use crate::test_app;

#[actix_web::test]
async fn test_create_and_get_user() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "plan": "pro",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(created["username"], "alice");
    assert_eq!(created["plan"], "pro");
    assert_eq!(created["created_at"], created["updated_at"]);
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_get_unknown_user_is_404() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/users/user_999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn test_create_user_validates_payload() {
    let app = test_app!();

    // Bad email
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "bob", "email": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Unknown plan tier
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "bob",
            "email": "bob@example.com",
            "plan": "platinum",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_user_merges_fields() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "carol", "email": "carol@example.com" }))
        .to_request();
    let created: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["plan"], "free");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", id))
        .set_json(json!({ "plan": "team" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["plan"], "team");
    assert_eq!(updated["username"], "carol");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[actix_web::test]
async fn test_update_unknown_user_is_404() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri("/api/users/user_404")
        .set_json(json!({ "username": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_user_is_idempotent() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "dave", "email": "dave@example.com" }))
        .to_request();
    let created: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["deleted"], true);

    // Second delete reports "not removed", not an error
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["deleted"], false);
}

//! Project API integration tests
//!
//! Tests for /api/projects endpoints

use actix_web::{http::StatusCode, test};
use serde_json::json;

use crate::test_app;

#[actix_web::test]
async fn test_create_then_get_returns_identical_record() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "user_id": "u1", "name": "demo" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: serde_json::Value = test::read_body_json(resp).await;
    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "demo");
    assert_eq!(created["created_at"], created["updated_at"]);
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_get_unknown_project_is_404() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/projects/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_projects_listed_newest_first() {
    let app = test_app!();

    for name in ["one", "two", "three"] {
        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({ "user_id": "u1", "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
    // A different user's project must not appear in the listing
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "user_id": "u2", "name": "other" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/projects/user/u1")
        .to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["three", "two", "one"]);
}

#[actix_web::test]
async fn test_listing_for_unknown_user_is_empty() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/projects/user/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_create_project_validates_payload() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "user_id": "", "name": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "user_id": "u1", "name": "x".repeat(101) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_project_deployment_status() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "user_id": "u1", "name": "deployable" }))
        .to_request();
    let created: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", id))
        .set_json(json!({
            "deployment_status": "deployed",
            "deployed_url": "https://demo.netlify.app",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["deployment_status"], "deployed");
    assert_eq!(updated["deployed_url"], "https://demo.netlify.app");

    // Unknown status values are rejected before storage
    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", id))
        .set_json(json!({ "deployment_status": "launched" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_project() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "user_id": "u1", "name": "doomed" }))
        .to_request();
    let created: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/projects/{}", id))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["deleted"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

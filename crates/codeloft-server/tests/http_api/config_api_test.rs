//! Project config API integration tests
//!
//! Tests for /api/projects/{id}/config

use actix_web::{http::StatusCode, test};
use serde_json::json;

use crate::test_app;

#[actix_web::test]
async fn test_config_absent_until_saved() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/projects/1/config")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/projects/1/config")
        .set_json(json!({
            "framework": "vite",
            "build_command": "npm run build",
            "output_directory": "dist",
            "environment_variables": { "NODE_ENV": "production" },
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/projects/1/config")
        .to_request();
    let fetched: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched["framework"], "vite");
    assert_eq!(fetched["environment_variables"]["NODE_ENV"], "production");
}

#[actix_web::test]
async fn test_config_upsert_replaces_in_place() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri("/api/projects/1/config")
        .set_json(json!({ "framework": "vite" }))
        .to_request();
    let first: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::put()
        .uri("/api/projects/1/config")
        .set_json(json!({ "framework": "next", "build_command": "next build" }))
        .to_request();
    let second: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["created_at"], first["created_at"]);
    assert_eq!(second["framework"], "next");
}

#[actix_web::test]
async fn test_config_requires_framework() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri("/api/projects/1/config")
        .set_json(json!({ "framework": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

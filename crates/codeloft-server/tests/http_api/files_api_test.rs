//! Project file API integration tests
//!
//! Tests for /api/projects/{id}/files endpoints

use actix_web::{http::StatusCode, test};
use serde_json::json;

use crate::test_app;

#[actix_web::test]
async fn test_save_and_get_file() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects/1/files")
        .set_json(json!({ "path": "src/index.ts", "content": "console.log(1)" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let saved: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(saved["project_id"], 1);
    assert_eq!(saved["path"], "src/index.ts");

    let req = test::TestRequest::get()
        .uri("/api/projects/1/files/src/index.ts")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched, saved);
}

#[actix_web::test]
async fn test_upsert_twice_keeps_identity() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects/1/files")
        .set_json(json!({ "path": "main.rs", "content": "v1" }))
        .to_request();
    let first: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::post()
        .uri("/api/projects/1/files")
        .set_json(json!({ "path": "main.rs", "content": "v2" }))
        .to_request();
    let second: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["created_at"], first["created_at"]);
    assert_eq!(second["content"], "v2");

    // Exactly one stored record
    let req = test::TestRequest::get().uri("/api/projects/1/files").to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_files_listed_sorted_by_path() {
    let app = test_app!();

    for path in ["zeta.ts", "alpha.ts", "src/mid.ts"] {
        let req = test::TestRequest::post()
            .uri("/api/projects/1/files")
            .set_json(json!({ "path": path, "content": "" }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/projects/1/files").to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let paths: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["alpha.ts", "src/mid.ts", "zeta.ts"]);
}

#[actix_web::test]
async fn test_save_file_rejects_bad_paths() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects/1/files")
        .set_json(json!({ "path": "", "content": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/projects/1/files")
        .set_json(json!({ "path": "../escape", "content": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_absent_file_reports_not_removed() {
    let app = test_app!();

    let req = test::TestRequest::delete()
        .uri("/api/projects/1/files/ghost.ts")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["deleted"], false);
}

#[actix_web::test]
async fn test_files_are_scoped_per_project() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects/1/files")
        .set_json(json!({ "path": "shared.ts", "content": "one" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/projects/2/files")
        .set_json(json!({ "path": "shared.ts", "content": "two" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/projects/2/files/shared.ts")
        .to_request();
    let fetched: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched["content"], "two");

    let req = test::TestRequest::get().uri("/api/projects/1/files").to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

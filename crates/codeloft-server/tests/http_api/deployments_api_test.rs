//! Deployment API integration tests
//!
//! Tests for /api/projects/{id}/deployments and /api/projects/{id}/deploy

use actix_web::{http::StatusCode, test};

use crate::test_app;

#[actix_web::test]
async fn test_deploy_creates_pending_record() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/projects/1/deploy")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let deployment: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(deployment["project_id"], 1);
    assert_eq!(deployment["status"], "pending");
    assert!(deployment["deployment_url"].as_str().unwrap().starts_with("https://"));
    assert_eq!(deployment["created_at"], deployment["updated_at"]);
}

#[actix_web::test]
async fn test_deployments_listed_newest_first() {
    let app = test_app!();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/projects/1/deploy")
            .to_request();
        let deployment: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        ids.push(deployment["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get()
        .uri("/api/projects/1/deployments")
        .to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let listed_ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    ids.reverse();
    assert_eq!(listed_ids, ids);
}

#[actix_web::test]
async fn test_deployments_for_unknown_project_is_empty() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/projects/42/deployments")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

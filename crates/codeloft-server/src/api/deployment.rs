//! Project deployment API handlers

use actix_web::{HttpResponse, Responder, get, post, web};

use codeloft_persistence::{DeploymentStatus, NewDeployment};

use crate::model::{app_state::AppState, response};

/// GET /api/projects/{id}/deployments
#[get("/projects/{id}/deployments")]
pub async fn find_deployments(data: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    match data.persistence.deployment_find_by_project(*id).await {
        Ok(deployments) => HttpResponse::Ok().json(deployments),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// POST /api/projects/{id}/deploy
///
/// Records a pending deployment. Wiring this to a hosting provider is left
/// to the deployment worker; the API contract is just the record.
#[post("/projects/{id}/deploy")]
pub async fn deploy_project(data: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    let deployment = NewDeployment {
        project_id: *id,
        deployment_url: "https://placeholder-deploy-url.netlify.app".to_string(),
        status: DeploymentStatus::Pending,
        build_logs: None,
    };

    match data.persistence.deployment_create(deployment).await {
        Ok(deployment) => HttpResponse::Created().json(deployment),
        Err(e) => response::internal_error("Failed to create deployment", e),
    }
}

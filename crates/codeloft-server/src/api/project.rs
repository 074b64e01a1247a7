//! Project API handlers

use std::str::FromStr;

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use codeloft_api::model::{CreateProjectParam, UpdateProjectParam};
use codeloft_persistence::{DeploymentStatus, NewProject, ProjectPatch};

use crate::model::{app_state::AppState, response};

/// GET /api/projects/user/{user_id}
#[get("/projects/user/{user_id}")]
pub async fn find_projects_by_user(
    data: web::Data<AppState>,
    user_id: web::Path<String>,
) -> impl Responder {
    match data.persistence.project_find_by_user(&user_id).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// GET /api/projects/{id}
#[get("/projects/{id}")]
pub async fn find_project(data: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    match data.persistence.project_find_by_id(*id).await {
        Ok(Some(project)) => HttpResponse::Ok().json(project),
        Ok(None) => response::not_found("Project not found"),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// POST /api/projects
#[post("/projects")]
pub async fn create_project(
    data: web::Data<AppState>,
    param: web::Json<CreateProjectParam>,
) -> impl Responder {
    if let Err(e) = param.validate() {
        return response::bad_request(format!("caused: {}", e));
    }

    let param = param.into_inner();
    let new_project = NewProject {
        user_id: param.user_id,
        name: param.name,
        description: param.description,
    };

    match data.persistence.project_create(new_project).await {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => response::internal_error("Failed to create project", e),
    }
}

/// PUT /api/projects/{id}
#[put("/projects/{id}")]
pub async fn update_project(
    data: web::Data<AppState>,
    id: web::Path<i64>,
    param: web::Json<UpdateProjectParam>,
) -> impl Responder {
    if let Err(e) = param.validate() {
        return response::bad_request(format!("caused: {}", e));
    }

    let deployment_status = match param.deployment_status.as_deref() {
        Some(value) => match DeploymentStatus::from_str(value) {
            Ok(status) => Some(status),
            Err(e) => return response::bad_request(format!("caused: {}", e)),
        },
        None => None,
    };

    let param = param.into_inner();
    let patch = ProjectPatch {
        name: param.name,
        description: param.description,
        deployed_url: param.deployed_url,
        deployment_status,
    };

    match data.persistence.project_update(*id, patch).await {
        Ok(Some(project)) => HttpResponse::Ok().json(project),
        Ok(None) => response::not_found("Project not found"),
        Err(e) => response::internal_error("Failed to update project", e),
    }
}

/// DELETE /api/projects/{id}
#[delete("/projects/{id}")]
pub async fn delete_project(data: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    match data.persistence.project_delete(*id).await {
        Ok(deleted) => HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })),
        Err(e) => response::internal_error("Failed to delete project", e),
    }
}

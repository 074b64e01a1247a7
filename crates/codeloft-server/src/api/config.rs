//! Project config API handlers

use actix_web::{HttpResponse, Responder, get, put, web};

use codeloft_api::model::SaveConfigParam;
use codeloft_persistence::NewConfig;

use crate::model::{app_state::AppState, response};

/// GET /api/projects/{id}/config
#[get("/projects/{id}/config")]
pub async fn find_config(data: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    match data.persistence.config_find_by_project(*id).await {
        Ok(Some(config)) => HttpResponse::Ok().json(config),
        Ok(None) => response::not_found("Config not found"),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// PUT /api/projects/{id}/config
#[put("/projects/{id}/config")]
pub async fn save_config(
    data: web::Data<AppState>,
    id: web::Path<i64>,
    param: web::Json<SaveConfigParam>,
) -> impl Responder {
    if let Err(e) = param.validate() {
        return response::bad_request(format!("caused: {}", e));
    }

    let param = param.into_inner();
    let config = NewConfig {
        project_id: *id,
        framework: param.framework,
        build_command: param.build_command,
        output_directory: param.output_directory,
        environment_variables: param.environment_variables,
    };

    match data.persistence.config_upsert(config).await {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(e) => response::internal_error("Failed to save config", e),
    }
}

//! Project file API handlers
//!
//! Files are addressed by (project id from the URL, path). The catch-all
//! `{path:.*}` segment lets slashes through unescaped.

use actix_web::{HttpResponse, Responder, delete, get, post, web};

use codeloft_api::model::SaveFileParam;
use codeloft_persistence::NewFile;

use crate::model::{app_state::AppState, response};

/// GET /api/projects/{id}/files
#[get("/projects/{id}/files")]
pub async fn find_files(data: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    match data.persistence.file_find_all(*id).await {
        Ok(files) => HttpResponse::Ok().json(files),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// GET /api/projects/{id}/files/{path:.*}
#[get("/projects/{id}/files/{path:.*}")]
pub async fn find_file(
    data: web::Data<AppState>,
    key: web::Path<(i64, String)>,
) -> impl Responder {
    let (project_id, path) = key.into_inner();
    match data.persistence.file_find_one(project_id, &path).await {
        Ok(Some(file)) => HttpResponse::Ok().json(file),
        Ok(None) => response::not_found("File not found"),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// POST /api/projects/{id}/files
#[post("/projects/{id}/files")]
pub async fn save_file(
    data: web::Data<AppState>,
    id: web::Path<i64>,
    param: web::Json<SaveFileParam>,
) -> impl Responder {
    if let Err(e) = param.validate() {
        return response::bad_request(format!("caused: {}", e));
    }

    let param = param.into_inner();
    let file = NewFile {
        project_id: *id,
        path: param.path,
        content: param.content,
    };

    match data.persistence.file_upsert(file).await {
        Ok(file) => HttpResponse::Created().json(file),
        Err(e) => response::internal_error("Failed to save file", e),
    }
}

/// DELETE /api/projects/{id}/files/{path:.*}
#[delete("/projects/{id}/files/{path:.*}")]
pub async fn delete_file(
    data: web::Data<AppState>,
    key: web::Path<(i64, String)>,
) -> impl Responder {
    let (project_id, path) = key.into_inner();
    match data.persistence.file_delete(project_id, &path).await {
        Ok(deleted) => HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })),
        Err(e) => response::internal_error("Failed to delete file", e),
    }
}

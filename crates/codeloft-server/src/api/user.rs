//! User API handlers

use std::str::FromStr;

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use codeloft_api::model::{CreateUserParam, UpdateUserParam};
use codeloft_persistence::{NewUser, PlanTier, UserPatch};

use crate::model::{app_state::AppState, response};

/// GET /api/users/{id}
#[get("/users/{id}")]
pub async fn find_user(data: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match data.persistence.user_find_by_id(&id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => response::not_found("User not found"),
        Err(e) => response::internal_error("Internal server error", e),
    }
}

/// POST /api/users
#[post("/users")]
pub async fn create_user(
    data: web::Data<AppState>,
    param: web::Json<CreateUserParam>,
) -> impl Responder {
    if let Err(e) = param.validate() {
        return response::bad_request(format!("caused: {}", e));
    }

    let plan = match param.plan.as_deref() {
        Some(value) => match PlanTier::from_str(value) {
            Ok(plan) => plan,
            Err(e) => return response::bad_request(format!("caused: {}", e)),
        },
        None => PlanTier::default(),
    };

    let param = param.into_inner();
    let new_user = NewUser {
        username: param.username,
        email: param.email,
        plan,
        stripe_customer_id: param.stripe_customer_id,
    };

    match data.persistence.user_create(new_user).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => response::internal_error("Failed to create user", e),
    }
}

/// PUT /api/users/{id}
#[put("/users/{id}")]
pub async fn update_user(
    data: web::Data<AppState>,
    id: web::Path<String>,
    param: web::Json<UpdateUserParam>,
) -> impl Responder {
    if let Err(e) = param.validate() {
        return response::bad_request(format!("caused: {}", e));
    }

    let plan = match param.plan.as_deref() {
        Some(value) => match PlanTier::from_str(value) {
            Ok(plan) => Some(plan),
            Err(e) => return response::bad_request(format!("caused: {}", e)),
        },
        None => None,
    };

    let param = param.into_inner();
    let patch = UserPatch {
        username: param.username,
        email: param.email,
        plan,
        stripe_customer_id: param.stripe_customer_id,
    };

    match data.persistence.user_update(&id, patch).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => response::not_found("User not found"),
        Err(e) => response::internal_error("Failed to update user", e),
    }
}

/// DELETE /api/users/{id}
#[delete("/users/{id}")]
pub async fn delete_user(data: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match data.persistence.user_delete(&id).await {
        Ok(deleted) => HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })),
        Err(e) => response::internal_error("Failed to delete user", e),
    }
}

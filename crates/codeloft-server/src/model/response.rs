//! HTTP response helpers
//!
//! The wire error shape is `{"error": "..."}`. Backend faults are logged with
//! detail and surfaced to the client with the handler's context message only.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Error body for non-2xx responses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// 400 with the given message
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::new(message))
}

/// 404 with the given message
pub fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(message))
}

/// 500 for a genuine backend fault
///
/// The fault detail goes to the log; the client sees the context message.
pub fn internal_error(context: &str, err: anyhow::Error) -> HttpResponse {
    tracing::error!("{}: {:#}", context, err);
    HttpResponse::InternalServerError().json(ErrorBody::new(context))
}

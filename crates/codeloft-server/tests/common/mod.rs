//! Common test utilities for integration testing

use std::sync::Arc;

use actix_web::web;
use codeloft_ai::{AiConfig, AnthropicClient};
use codeloft_persistence::MemoryPersistService;
use codeloft_server::model::app_state::AppState;

/// Fresh application state backed by a memory store
///
/// No Anthropic credential is configured, so chat sessions fail fast with a
/// terminal error frame instead of reaching the network.
pub fn test_state() -> web::Data<AppState> {
    let persistence = Arc::new(MemoryPersistService::new());
    let ai_client = Arc::new(AnthropicClient::new(AiConfig::default()));
    web::Data::from(Arc::new(AppState {
        persistence,
        ai_client,
    }))
}

/// Assemble the full application for `actix_web::test`
#[macro_export]
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::common::test_state())
                .service(codeloft_server::api::route::routes()),
        )
        .await
    };
}

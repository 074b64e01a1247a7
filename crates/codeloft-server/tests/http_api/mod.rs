//! HTTP API integration tests

pub mod chat_api_test;
pub mod config_api_test;
pub mod deployments_api_test;
pub mod files_api_test;
pub mod projects_api_test;
pub mod users_api_test;

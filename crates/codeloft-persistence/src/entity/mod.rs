//! SeaORM entity definitions for the external database backend

pub mod prelude;

pub mod project_configs;
pub mod project_deployments;
pub mod project_files;
pub mod projects;
pub mod user_profiles;

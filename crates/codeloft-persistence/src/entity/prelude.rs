//! Re-exports of all entity types

pub use super::project_configs::Entity as ProjectConfigs;
pub use super::project_deployments::Entity as ProjectDeployments;
pub use super::project_files::Entity as ProjectFiles;
pub use super::projects::Entity as Projects;
pub use super::user_profiles::Entity as UserProfiles;

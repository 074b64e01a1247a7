//! Project deployment persistence trait

use async_trait::async_trait;

use crate::model::{DeploymentPatch, NewDeployment, ProjectDeployment};

/// Project deployment persistence operations
#[async_trait]
pub trait DeploymentPersistence: Send + Sync {
    /// Find all deployments of a project, newest first (`created_at` DESC)
    async fn deployment_find_by_project(
        &self,
        project_id: i64,
    ) -> anyhow::Result<Vec<ProjectDeployment>>;

    /// Create a deployment record, assigning a fresh id and stamping both
    /// timestamps
    async fn deployment_create(
        &self,
        deployment: NewDeployment,
    ) -> anyhow::Result<ProjectDeployment>;

    /// Merge the patch over an existing deployment, refreshing `updated_at`
    ///
    /// Returns `Ok(None)` when no deployment with this id exists.
    async fn deployment_update(
        &self,
        id: i64,
        patch: DeploymentPatch,
    ) -> anyhow::Result<Option<ProjectDeployment>>;
}

//! Project persistence trait

use async_trait::async_trait;

use crate::model::{NewProject, Project, ProjectPatch};

/// Project persistence operations
#[async_trait]
pub trait ProjectPersistence: Send + Sync {
    /// Find a project by id
    async fn project_find_by_id(&self, id: i64) -> anyhow::Result<Option<Project>>;

    /// Find all projects owned by a user, newest first (`created_at` DESC)
    async fn project_find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Project>>;

    /// Create a project, assigning a fresh id and stamping both timestamps
    async fn project_create(&self, project: NewProject) -> anyhow::Result<Project>;

    /// Merge the patch over an existing project, refreshing `updated_at`
    ///
    /// Returns `Ok(None)` when no project with this id exists.
    async fn project_update(
        &self,
        id: i64,
        patch: ProjectPatch,
    ) -> anyhow::Result<Option<Project>>;

    /// Delete a project; returns whether a record was actually removed
    async fn project_delete(&self, id: i64) -> anyhow::Result<bool>;
}

//! Project config persistence trait
//!
//! A project has at most one config; the natural key is `project_id`.

use async_trait::async_trait;

use crate::model::{NewConfig, ProjectConfig};

/// Project config persistence operations
#[async_trait]
pub trait ConfigPersistence: Send + Sync {
    /// Find the config of a project
    async fn config_find_by_project(
        &self,
        project_id: i64,
    ) -> anyhow::Result<Option<ProjectConfig>>;

    /// Create or replace the config keyed by `project_id`
    ///
    /// When a record already exists, its surrogate id and `created_at` are
    /// preserved. The lookup and the write are atomic.
    async fn config_upsert(&self, config: NewConfig) -> anyhow::Result<ProjectConfig>;
}

//! Project file persistence trait
//!
//! Files are addressed by the composite natural key (`project_id`, `path`).

use async_trait::async_trait;

use crate::model::{NewFile, ProjectFile};

/// Project file persistence operations
#[async_trait]
pub trait FilePersistence: Send + Sync {
    /// Find all files of a project, sorted by path ascending
    async fn file_find_all(&self, project_id: i64) -> anyhow::Result<Vec<ProjectFile>>;

    /// Find a single file by its composite key
    async fn file_find_one(
        &self,
        project_id: i64,
        path: &str,
    ) -> anyhow::Result<Option<ProjectFile>>;

    /// Create or replace a file keyed by (`project_id`, `path`)
    ///
    /// When a record already exists, its surrogate id and `created_at` are
    /// preserved while content and `updated_at` are replaced. The lookup and
    /// the write are atomic: two concurrent upserts on one key cannot both
    /// observe "absent".
    async fn file_upsert(&self, file: NewFile) -> anyhow::Result<ProjectFile>;

    /// Delete a file; returns whether a record was actually removed
    async fn file_delete(&self, project_id: i64, path: &str) -> anyhow::Result<bool>;
}

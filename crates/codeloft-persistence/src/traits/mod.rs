//! Persistence traits for the unified storage abstraction layer
//!
//! This module defines the core persistence traits that abstract over the two
//! storage backends: external database (MySQL/PostgreSQL) and in-process
//! memory store.
//!
//! Contract shared by every operation: legitimate absence is `Ok(None)` /
//! `Ok(false)`, never an error; only genuine backend failures (connectivity,
//! serialization) surface as `Err`.

pub mod config;
pub mod deployment;
pub mod file;
pub mod project;
pub mod user;

pub use config::ConfigPersistence;
pub use deployment::DeploymentPersistence;
pub use file::FilePersistence;
pub use project::ProjectPersistence;
pub use user::UserPersistence;

use async_trait::async_trait;

use crate::model::StorageMode;

/// Unified persistence service trait
///
/// This is the main interface for all storage operations. The route layer
/// holds an `Arc<dyn PersistenceService>` constructed once at startup and
/// injected everywhere it is needed.
#[async_trait]
pub trait PersistenceService:
    UserPersistence
    + ProjectPersistence
    + FilePersistence
    + DeploymentPersistence
    + ConfigPersistence
    + Send
    + Sync
{
    /// Get the current storage mode
    fn storage_mode(&self) -> StorageMode;

    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;
}

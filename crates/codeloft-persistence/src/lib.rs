//! Codeloft Persistence - storage records and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the external database backend
//! - Persistence trait abstractions for unified storage
//! - Storage record types shared by all backends

pub mod entity;
pub mod memory;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export persistence traits
pub use traits::{
    ConfigPersistence, DeploymentPersistence, FilePersistence, PersistenceService,
    ProjectPersistence, UserPersistence,
};

// Re-export SQL backend
pub use sql::ExternalDbPersistService;

// Re-export memory backend
pub use memory::MemoryPersistService;

// Re-export record types
pub use model::{
    DeploymentPatch, DeploymentStatus, NewConfig, NewDeployment, NewFile, NewProject, NewUser,
    PlanTier, Project, ProjectConfig, ProjectDeployment, ProjectFile, ProjectPatch, StorageMode,
    User, UserPatch,
};

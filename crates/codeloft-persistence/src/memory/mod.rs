//! In-process memory persistence backend
//!
//! Provides volatile, single-process storage without an external database.
//! One keyed container per entity; files are keyed by their composite
//! natural key and configs by project id. Each entity type draws ids from
//! its own atomic counter, so concurrent creates of different entity types
//! never contend and never collide.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::model::*;
use crate::traits::*;

/// Memory persistence service
///
/// The upsert paths go through the map entry API, which holds the shard lock
/// for the key across the lookup and the write: two concurrent upserts on one
/// composite key cannot both observe "absent".
pub struct MemoryPersistService {
    users: DashMap<String, User>,
    projects: DashMap<i64, Project>,
    files: DashMap<(i64, String), ProjectFile>,
    deployments: DashMap<i64, ProjectDeployment>,
    configs: DashMap<i64, ProjectConfig>,
    user_seq: AtomicI64,
    project_seq: AtomicI64,
    file_seq: AtomicI64,
    deployment_seq: AtomicI64,
    config_seq: AtomicI64,
}

impl MemoryPersistService {
    pub fn new() -> Self {
        tracing::info!("memory persistence initialized");
        Self {
            users: DashMap::new(),
            projects: DashMap::new(),
            files: DashMap::new(),
            deployments: DashMap::new(),
            configs: DashMap::new(),
            user_seq: AtomicI64::new(1),
            project_seq: AtomicI64::new(1),
            file_seq: AtomicI64::new(1),
            deployment_seq: AtomicI64::new(1),
            config_seq: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryPersistService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceService for MemoryPersistService {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::Memory
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl UserPersistence for MemoryPersistService {
    async fn user_find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn user_create(&self, user: NewUser) -> anyhow::Result<User> {
        let seq = self.user_seq.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let record = User {
            id: format!("user_{}", seq),
            username: user.username,
            email: user.email,
            plan: user.plan,
            stripe_customer_id: user.stripe_customer_id,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn user_update(&self, id: &str, patch: UserPatch) -> anyhow::Result<Option<User>> {
        let Some(mut entry) = self.users.get_mut(id) else {
            return Ok(None);
        };
        let record = entry.value_mut();
        if let Some(username) = patch.username {
            record.username = username;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(plan) = patch.plan {
            record.plan = plan;
        }
        if let Some(stripe_customer_id) = patch.stripe_customer_id {
            record.stripe_customer_id = Some(stripe_customer_id);
        }
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn user_delete(&self, id: &str) -> anyhow::Result<bool> {
        Ok(self.users.remove(id).is_some())
    }
}

#[async_trait]
impl ProjectPersistence for MemoryPersistService {
    async fn project_find_by_id(&self, id: i64) -> anyhow::Result<Option<Project>> {
        Ok(self.projects.get(&id).map(|entry| entry.value().clone()))
    }

    async fn project_find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        let mut found: Vec<Project> = self
            .projects
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        // Newest first; ids break ties between same-instant creations
        found.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(found)
    }

    async fn project_create(&self, project: NewProject) -> anyhow::Result<Project> {
        let id = self.project_seq.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let record = Project {
            id,
            user_id: project.user_id,
            name: project.name,
            description: project.description,
            deployed_url: None,
            deployment_status: None,
            created_at: now,
            updated_at: now,
        };
        self.projects.insert(id, record.clone());
        Ok(record)
    }

    async fn project_update(
        &self,
        id: i64,
        patch: ProjectPatch,
    ) -> anyhow::Result<Option<Project>> {
        let Some(mut entry) = self.projects.get_mut(&id) else {
            return Ok(None);
        };
        let record = entry.value_mut();
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(description) = patch.description {
            record.description = Some(description);
        }
        if let Some(deployed_url) = patch.deployed_url {
            record.deployed_url = Some(deployed_url);
        }
        if let Some(status) = patch.deployment_status {
            record.deployment_status = Some(status);
        }
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn project_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.projects.remove(&id).is_some())
    }
}

#[async_trait]
impl FilePersistence for MemoryPersistService {
    async fn file_find_all(&self, project_id: i64) -> anyhow::Result<Vec<ProjectFile>> {
        let mut found: Vec<ProjectFile> = self
            .files
            .iter()
            .filter(|entry| entry.project_id == project_id)
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(found)
    }

    async fn file_find_one(
        &self,
        project_id: i64,
        path: &str,
    ) -> anyhow::Result<Option<ProjectFile>> {
        let key = (project_id, path.to_string());
        Ok(self.files.get(&key).map(|entry| entry.value().clone()))
    }

    async fn file_upsert(&self, file: NewFile) -> anyhow::Result<ProjectFile> {
        let key = (file.project_id, file.path.clone());
        let now = Utc::now();
        let record = match self.files.entry(key) {
            Entry::Occupied(mut occupied) => {
                let existing = occupied.get();
                let replacement = ProjectFile {
                    id: existing.id,
                    project_id: file.project_id,
                    path: file.path,
                    content: file.content,
                    created_at: existing.created_at,
                    updated_at: now,
                };
                occupied.insert(replacement.clone());
                replacement
            }
            Entry::Vacant(vacant) => {
                let id = self.file_seq.fetch_add(1, Ordering::SeqCst);
                let created = ProjectFile {
                    id,
                    project_id: file.project_id,
                    path: file.path,
                    content: file.content,
                    created_at: now,
                    updated_at: now,
                };
                vacant.insert(created.clone());
                created
            }
        };
        Ok(record)
    }

    async fn file_delete(&self, project_id: i64, path: &str) -> anyhow::Result<bool> {
        let key = (project_id, path.to_string());
        Ok(self.files.remove(&key).is_some())
    }
}

#[async_trait]
impl DeploymentPersistence for MemoryPersistService {
    async fn deployment_find_by_project(
        &self,
        project_id: i64,
    ) -> anyhow::Result<Vec<ProjectDeployment>> {
        let mut found: Vec<ProjectDeployment> = self
            .deployments
            .iter()
            .filter(|entry| entry.project_id == project_id)
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(found)
    }

    async fn deployment_create(
        &self,
        deployment: NewDeployment,
    ) -> anyhow::Result<ProjectDeployment> {
        let id = self.deployment_seq.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let record = ProjectDeployment {
            id,
            project_id: deployment.project_id,
            deployment_url: deployment.deployment_url,
            status: deployment.status,
            build_logs: deployment.build_logs,
            created_at: now,
            updated_at: now,
        };
        self.deployments.insert(id, record.clone());
        Ok(record)
    }

    async fn deployment_update(
        &self,
        id: i64,
        patch: DeploymentPatch,
    ) -> anyhow::Result<Option<ProjectDeployment>> {
        let Some(mut entry) = self.deployments.get_mut(&id) else {
            return Ok(None);
        };
        let record = entry.value_mut();
        if let Some(deployment_url) = patch.deployment_url {
            record.deployment_url = deployment_url;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        if let Some(build_logs) = patch.build_logs {
            record.build_logs = Some(build_logs);
        }
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }
}

#[async_trait]
impl ConfigPersistence for MemoryPersistService {
    async fn config_find_by_project(
        &self,
        project_id: i64,
    ) -> anyhow::Result<Option<ProjectConfig>> {
        Ok(self.configs.get(&project_id).map(|entry| entry.value().clone()))
    }

    async fn config_upsert(&self, config: NewConfig) -> anyhow::Result<ProjectConfig> {
        let now = Utc::now();
        let record = match self.configs.entry(config.project_id) {
            Entry::Occupied(mut occupied) => {
                let existing = occupied.get();
                let replacement = ProjectConfig {
                    id: existing.id,
                    project_id: config.project_id,
                    framework: config.framework,
                    build_command: config.build_command,
                    output_directory: config.output_directory,
                    environment_variables: config.environment_variables,
                    created_at: existing.created_at,
                    updated_at: now,
                };
                occupied.insert(replacement.clone());
                replacement
            }
            Entry::Vacant(vacant) => {
                let id = self.config_seq.fetch_add(1, Ordering::SeqCst);
                let created = ProjectConfig {
                    id,
                    project_id: config.project_id,
                    framework: config.framework,
                    build_command: config.build_command,
                    output_directory: config.output_directory,
                    environment_variables: config.environment_variables,
                    created_at: now,
                    updated_at: now,
                };
                vacant.insert(created.clone());
                created
            }
        };
        Ok(record)
    }
}

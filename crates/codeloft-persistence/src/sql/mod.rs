//! SQL-based persistence backend (MySQL/PostgreSQL via SeaORM)
//!
//! This module implements the persistence traits by translating each
//! operation into SeaORM queries. Zero rows is a legitimate result and maps
//! to `Ok(None)` / `Ok(false)`; connectivity and decoding failures propagate
//! as errors instead of being collapsed into absence.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use codeloft_common::CodeloftError;
use sea_orm::{prelude::Expr, sea_query::OnConflict, *};

use crate::entity::{project_configs, project_deployments, project_files, projects, user_profiles};
use crate::model::*;
use crate::traits::*;

/// External database persistence service
///
/// Wraps a SeaORM `DatabaseConnection` shared by all operations. Atomicity of
/// the composite-key upserts is delegated to the database via `ON CONFLICT`.
pub struct ExternalDbPersistService {
    db: DatabaseConnection,
}

impl ExternalDbPersistService {
    /// Create a new ExternalDbPersistService with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

// ============================================================================
// Entity <-> record conversions
// ============================================================================

fn user_entity_to_record(model: user_profiles::Model) -> anyhow::Result<User> {
    let plan = PlanTier::from_str(&model.plan)
        .map_err(|e| anyhow::Error::new(CodeloftError::DatabaseError(e)))?;
    Ok(User {
        id: model.id,
        username: model.username,
        email: model.email,
        plan,
        stripe_customer_id: model.stripe_customer_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn project_entity_to_record(model: projects::Model) -> anyhow::Result<Project> {
    let deployment_status = model
        .deployment_status
        .as_deref()
        .map(DeploymentStatus::from_str)
        .transpose()
        .map_err(|e| anyhow::Error::new(CodeloftError::DatabaseError(e)))?;
    Ok(Project {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        description: model.description,
        deployed_url: model.deployed_url,
        deployment_status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn file_entity_to_record(model: project_files::Model) -> ProjectFile {
    ProjectFile {
        id: model.id,
        project_id: model.project_id,
        path: model.path,
        content: model.content,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn deployment_entity_to_record(
    model: project_deployments::Model,
) -> anyhow::Result<ProjectDeployment> {
    let status = DeploymentStatus::from_str(&model.status)
        .map_err(|e| anyhow::Error::new(CodeloftError::DatabaseError(e)))?;
    Ok(ProjectDeployment {
        id: model.id,
        project_id: model.project_id,
        deployment_url: model.deployment_url,
        status,
        build_logs: model.build_logs,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn config_entity_to_record(model: project_configs::Model) -> anyhow::Result<ProjectConfig> {
    let environment_variables = model
        .environment_variables
        .map(serde_json::from_value)
        .transpose()?;
    Ok(ProjectConfig {
        id: model.id,
        project_id: model.project_id,
        framework: model.framework,
        build_command: model.build_command,
        output_directory: model.output_directory,
        environment_variables,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ============================================================================
// PersistenceService implementation
// ============================================================================

#[async_trait]
impl PersistenceService for ExternalDbPersistService {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::ExternalDb
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        // Execute a simple query to verify connectivity
        user_profiles::Entity::find()
            .select_only()
            .column_as(Expr::cust("1"), "health")
            .into_tuple::<i32>()
            .one(&self.db)
            .await?;
        Ok(())
    }
}

// ============================================================================
// UserPersistence implementation
// ============================================================================

#[async_trait]
impl UserPersistence for ExternalDbPersistService {
    async fn user_find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        user_profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(user_entity_to_record)
            .transpose()
    }

    async fn user_create(&self, user: NewUser) -> anyhow::Result<User> {
        let now = Utc::now();
        let active = user_profiles::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(user.username),
            email: Set(user.email),
            plan: Set(user.plan.as_str().to_string()),
            stripe_customer_id: Set(user.stripe_customer_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active.insert(&self.db).await?;
        user_entity_to_record(model)
    }

    async fn user_update(&self, id: &str, patch: UserPatch) -> anyhow::Result<Option<User>> {
        let Some(existing) = user_profiles::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(username) = patch.username {
            active.username = Set(username);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(plan) = patch.plan {
            active.plan = Set(plan.as_str().to_string());
        }
        if let Some(stripe_customer_id) = patch.stripe_customer_id {
            active.stripe_customer_id = Set(Some(stripe_customer_id));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        user_entity_to_record(model).map(Some)
    }

    async fn user_delete(&self, id: &str) -> anyhow::Result<bool> {
        let result = user_profiles::Entity::delete_many()
            .filter(user_profiles::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// ProjectPersistence implementation
// ============================================================================

#[async_trait]
impl ProjectPersistence for ExternalDbPersistService {
    async fn project_find_by_id(&self, id: i64) -> anyhow::Result<Option<Project>> {
        projects::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(project_entity_to_record)
            .transpose()
    }

    async fn project_find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        projects::Entity::find()
            .filter(projects::Column::UserId.eq(user_id))
            .order_by_desc(projects::Column::CreatedAt)
            .order_by_desc(projects::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(project_entity_to_record)
            .collect()
    }

    async fn project_create(&self, project: NewProject) -> anyhow::Result<Project> {
        let now = Utc::now();
        let active = projects::ActiveModel {
            id: NotSet,
            user_id: Set(project.user_id),
            name: Set(project.name),
            description: Set(project.description),
            deployed_url: Set(None),
            deployment_status: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active.insert(&self.db).await?;
        project_entity_to_record(model)
    }

    async fn project_update(
        &self,
        id: i64,
        patch: ProjectPatch,
    ) -> anyhow::Result<Option<Project>> {
        let Some(existing) = projects::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        if let Some(deployed_url) = patch.deployed_url {
            active.deployed_url = Set(Some(deployed_url));
        }
        if let Some(status) = patch.deployment_status {
            active.deployment_status = Set(Some(status.as_str().to_string()));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        project_entity_to_record(model).map(Some)
    }

    async fn project_delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = projects::Entity::delete_many()
            .filter(projects::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// FilePersistence implementation
// ============================================================================

#[async_trait]
impl FilePersistence for ExternalDbPersistService {
    async fn file_find_all(&self, project_id: i64) -> anyhow::Result<Vec<ProjectFile>> {
        let models = project_files::Entity::find()
            .filter(project_files::Column::ProjectId.eq(project_id))
            .order_by_asc(project_files::Column::Path)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(file_entity_to_record).collect())
    }

    async fn file_find_one(
        &self,
        project_id: i64,
        path: &str,
    ) -> anyhow::Result<Option<ProjectFile>> {
        let model = project_files::Entity::find()
            .filter(project_files::Column::ProjectId.eq(project_id))
            .filter(project_files::Column::Path.eq(path))
            .one(&self.db)
            .await?;
        Ok(model.map(file_entity_to_record))
    }

    async fn file_upsert(&self, file: NewFile) -> anyhow::Result<ProjectFile> {
        let now = Utc::now();
        let active = project_files::ActiveModel {
            id: NotSet,
            project_id: Set(file.project_id),
            path: Set(file.path.clone()),
            content: Set(file.content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // ON CONFLICT on the natural key keeps the lookup and the write
        // atomic in the database; created_at and the surrogate id survive.
        project_files::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([
                    project_files::Column::ProjectId,
                    project_files::Column::Path,
                ])
                .update_columns([
                    project_files::Column::Content,
                    project_files::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await?;

        let model = project_files::Entity::find()
            .filter(project_files::Column::ProjectId.eq(file.project_id))
            .filter(project_files::Column::Path.eq(file.path.as_str()))
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("project file missing after upsert"))?;
        Ok(file_entity_to_record(model))
    }

    async fn file_delete(&self, project_id: i64, path: &str) -> anyhow::Result<bool> {
        let result = project_files::Entity::delete_many()
            .filter(project_files::Column::ProjectId.eq(project_id))
            .filter(project_files::Column::Path.eq(path))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// DeploymentPersistence implementation
// ============================================================================

#[async_trait]
impl DeploymentPersistence for ExternalDbPersistService {
    async fn deployment_find_by_project(
        &self,
        project_id: i64,
    ) -> anyhow::Result<Vec<ProjectDeployment>> {
        project_deployments::Entity::find()
            .filter(project_deployments::Column::ProjectId.eq(project_id))
            .order_by_desc(project_deployments::Column::CreatedAt)
            .order_by_desc(project_deployments::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(deployment_entity_to_record)
            .collect()
    }

    async fn deployment_create(
        &self,
        deployment: NewDeployment,
    ) -> anyhow::Result<ProjectDeployment> {
        let now = Utc::now();
        let active = project_deployments::ActiveModel {
            id: NotSet,
            project_id: Set(deployment.project_id),
            deployment_url: Set(deployment.deployment_url),
            status: Set(deployment.status.as_str().to_string()),
            build_logs: Set(deployment.build_logs),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active.insert(&self.db).await?;
        deployment_entity_to_record(model)
    }

    async fn deployment_update(
        &self,
        id: i64,
        patch: DeploymentPatch,
    ) -> anyhow::Result<Option<ProjectDeployment>> {
        let Some(existing) = project_deployments::Entity::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(deployment_url) = patch.deployment_url {
            active.deployment_url = Set(deployment_url);
        }
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(build_logs) = patch.build_logs {
            active.build_logs = Set(Some(build_logs));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        deployment_entity_to_record(model).map(Some)
    }
}

// ============================================================================
// ConfigPersistence implementation
// ============================================================================

#[async_trait]
impl ConfigPersistence for ExternalDbPersistService {
    async fn config_find_by_project(
        &self,
        project_id: i64,
    ) -> anyhow::Result<Option<ProjectConfig>> {
        project_configs::Entity::find()
            .filter(project_configs::Column::ProjectId.eq(project_id))
            .one(&self.db)
            .await?
            .map(config_entity_to_record)
            .transpose()
    }

    async fn config_upsert(&self, config: NewConfig) -> anyhow::Result<ProjectConfig> {
        let now = Utc::now();
        let environment_variables = config
            .environment_variables
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?;
        let active = project_configs::ActiveModel {
            id: NotSet,
            project_id: Set(config.project_id),
            framework: Set(config.framework),
            build_command: Set(config.build_command),
            output_directory: Set(config.output_directory),
            environment_variables: Set(environment_variables),
            created_at: Set(now),
            updated_at: Set(now),
        };

        project_configs::Entity::insert(active)
            .on_conflict(
                OnConflict::column(project_configs::Column::ProjectId)
                    .update_columns([
                        project_configs::Column::Framework,
                        project_configs::Column::BuildCommand,
                        project_configs::Column::OutputDirectory,
                        project_configs::Column::EnvironmentVariables,
                        project_configs::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        let model = project_configs::Entity::find()
            .filter(project_configs::Column::ProjectId.eq(config.project_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("project config missing after upsert"))?;
        config_entity_to_record(model)
    }
}

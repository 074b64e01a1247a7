//! Storage record types shared by all persistence backends
//!
//! Records carry their identity and timestamps; the `New*` companions are the
//! insert shapes (identity and timestamps assigned by the backend) and the
//! `*Patch` companions are the partial-update shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage backend selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageMode {
    /// External database (MySQL/PostgreSQL via SeaORM)
    ExternalDb,
    /// In-process memory store (single node, volatile)
    Memory,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::ExternalDb => write!(f, "external_db"),
            StorageMode::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "external_db" => Ok(StorageMode::ExternalDb),
            "memory" => Ok(StorageMode::Memory),
            _ => Err(format!("Invalid storage mode: {}", s)),
        }
    }
}

/// Subscription plan tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Team,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
            PlanTier::Team => "team",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(PlanTier::Free),
            "pro" => Ok(PlanTier::Pro),
            "team" => Ok(PlanTier::Team),
            _ => Err(format!("Invalid plan tier: {}", s)),
        }
    }
}

/// Deployment lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Pending,
    Building,
    Deployed,
    Failed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Pending => "pending",
            DeploymentStatus::Building => "building",
            DeploymentStatus::Deployed => "deployed",
            DeploymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DeploymentStatus::Pending),
            "building" => Ok(DeploymentStatus::Building),
            "deployed" => Ok(DeploymentStatus::Deployed),
            "failed" => Ok(DeploymentStatus::Failed),
            _ => Err(format!("Invalid deployment status: {}", s)),
        }
    }
}

/// User account record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub plan: PlanTier,
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for [`User`]
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub plan: PlanTier,
    pub stripe_customer_id: Option<String>,
}

/// Partial-update shape for [`User`]
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub plan: Option<PlanTier>,
    pub stripe_customer_id: Option<String>,
}

/// Project record, owned by exactly one user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub deployed_url: Option<String>,
    pub deployment_status: Option<DeploymentStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for [`Project`]
#[derive(Clone, Debug)]
pub struct NewProject {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Partial-update shape for [`Project`]
#[derive(Clone, Debug, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deployed_url: Option<String>,
    pub deployment_status: Option<DeploymentStatus>,
}

/// Path-addressed file belonging to a project
///
/// The natural key is (`project_id`, `path`); `id` is a surrogate kept stable
/// across upserts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: i64,
    pub project_id: i64,
    pub path: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert/upsert shape for [`ProjectFile`]
#[derive(Clone, Debug)]
pub struct NewFile {
    pub project_id: i64,
    pub path: String,
    pub content: String,
}

/// Deployment record for a project
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDeployment {
    pub id: i64,
    pub project_id: i64,
    pub deployment_url: String,
    pub status: DeploymentStatus,
    pub build_logs: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for [`ProjectDeployment`]
#[derive(Clone, Debug)]
pub struct NewDeployment {
    pub project_id: i64,
    pub deployment_url: String,
    pub status: DeploymentStatus,
    pub build_logs: Option<String>,
}

/// Partial-update shape for [`ProjectDeployment`]
#[derive(Clone, Debug, Default)]
pub struct DeploymentPatch {
    pub deployment_url: Option<String>,
    pub status: Option<DeploymentStatus>,
    pub build_logs: Option<String>,
}

/// Build configuration, at most one per project
///
/// The natural key is `project_id`; `id` is a surrogate kept stable across
/// upserts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub id: i64,
    pub project_id: i64,
    pub framework: String,
    pub build_command: Option<String>,
    pub output_directory: Option<String>,
    pub environment_variables: Option<std::collections::HashMap<String, String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert/upsert shape for [`ProjectConfig`]
#[derive(Clone, Debug)]
pub struct NewConfig {
    pub project_id: i64,
    pub framework: String,
    pub build_command: Option<String>,
    pub output_directory: Option<String>,
    pub environment_variables: Option<std::collections::HashMap<String, String>>,
}

//! `SeaORM` Entity for projects table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub deployed_url: Option<String>,
    pub deployment_status: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_profiles::Entity",
        from = "Column::UserId",
        to = "super::user_profiles::Column::Id"
    )]
    UserProfiles,
    #[sea_orm(has_many = "super::project_files::Entity")]
    ProjectFiles,
    #[sea_orm(has_many = "super::project_deployments::Entity")]
    ProjectDeployments,
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfiles.def()
    }
}

impl Related<super::project_files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectFiles.def()
    }
}

impl Related<super::project_deployments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectDeployments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

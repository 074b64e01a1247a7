//! Request payloads for the Codeloft HTTP API
//!
//! Plain serde structs; handlers run the checks from [`crate::validation`]
//! before touching storage.

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::validation::{
    validate_description, validate_email, validate_file_path, validate_http_url,
    validate_project_name, validate_username,
};

/// Payload for `POST /api/users`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    /// Plan tier; defaults to the free tier when omitted
    #[serde(default)]
    pub plan: Option<String>,
    pub stripe_customer_id: Option<String>,
}

impl CreateUserParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }
}

/// Payload for `PUT /api/users/{id}` - every field optional
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub plan: Option<String>,
    pub stripe_customer_id: Option<String>,
}

impl UpdateUserParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ref username) = self.username {
            validate_username(username)?;
        }
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Payload for `POST /api/projects`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProjectParam {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
}

impl CreateProjectParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.is_empty() {
            return Err(ValidationError::new("user_id_empty"));
        }
        validate_project_name(&self.name)?;
        if let Some(ref description) = self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

/// Payload for `PUT /api/projects/{id}` - every field optional
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateProjectParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deployed_url: Option<String>,
    pub deployment_status: Option<String>,
}

impl UpdateProjectParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ref name) = self.name {
            validate_project_name(name)?;
        }
        if let Some(ref description) = self.description {
            validate_description(description)?;
        }
        if let Some(ref url) = self.deployed_url {
            validate_http_url(url)?;
        }
        Ok(())
    }
}

/// Payload for `POST /api/projects/{id}/files`
///
/// The project id comes from the URL; the composite key is completed by `path`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveFileParam {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

impl SaveFileParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_file_path(&self.path)
    }
}

/// Payload for `PUT /api/projects/{id}/config`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveConfigParam {
    pub framework: String,
    pub build_command: Option<String>,
    pub output_directory: Option<String>,
    pub environment_variables: Option<std::collections::HashMap<String, String>>,
}

impl SaveConfigParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.framework.is_empty() {
            return Err(ValidationError::new("framework_empty"));
        }
        Ok(())
    }
}

/// Payload for `POST /api/claude-stream`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatParam {
    #[serde(default)]
    pub message: String,
    /// One of `chat`, `code`, `debug`; unknown values fall back to `chat`
    pub mode: Option<String>,
}

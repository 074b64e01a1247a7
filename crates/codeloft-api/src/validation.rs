//! Input validation utilities for the Codeloft API
//!
//! This module provides validation functions for API request payloads.
//! Field limits mirror what the browser client is allowed to submit.

use validator::{ValidateEmail, ValidationError};

/// Maximum length for username field
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length for project name field
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Maximum length for project description field
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validate username format
///
/// Usernames must:
/// - Not be empty
/// - Not exceed MAX_USERNAME_LENGTH characters
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::new("username_empty"));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::new("username_too_long"));
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email.validate_email() {
        return Err(ValidationError::new("email_invalid"));
    }
    Ok(())
}

/// Validate project name
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("project_name_empty"));
    }
    if name.len() > MAX_PROJECT_NAME_LENGTH {
        return Err(ValidationError::new("project_name_too_long"));
    }
    Ok(())
}

/// Validate project description
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::new("description_too_long"));
    }
    Ok(())
}

/// Validate a project file path
///
/// Paths must:
/// - Not be empty
/// - Not contain parent-directory segments
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("path_empty"));
    }
    if path.split('/').any(|segment| segment == "..") {
        return Err(ValidationError::new("path_traversal"));
    }
    Ok(())
}

/// Validate a deployment or deployed URL
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        _ => Err(ValidationError::new("url_invalid")),
    }
}

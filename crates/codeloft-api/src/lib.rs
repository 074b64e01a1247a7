//! Codeloft API - wire models and request validation
//!
//! This crate defines the request payloads accepted by the HTTP surface and
//! the validation rules applied to them before any storage call is made.

pub mod model;
pub mod validation;

pub use model::{
    ChatParam, CreateProjectParam, CreateUserParam, SaveConfigParam, SaveFileParam,
    UpdateProjectParam, UpdateUserParam,
};

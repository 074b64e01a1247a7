//! HTTP API handlers
//!
//! One module per resource; `route` assembles the `/api` scope.

pub mod chat;
pub mod config;
pub mod deployment;
pub mod file;
pub mod health;
pub mod project;
pub mod route;
pub mod user;

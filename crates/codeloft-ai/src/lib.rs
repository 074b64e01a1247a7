//! Codeloft AI - Anthropic streaming completion client
//!
//! This crate provides:
//! - `AnthropicClient`: opens token-streaming sessions against the Anthropic
//!   Messages API
//! - `CompletionSession`: an owned session handle yielding stream events,
//!   cancellable from exactly one place
//! - SSE wire-event parsing for the Anthropic streaming format

pub mod client;
pub mod error;
pub mod model;
pub mod sse;

pub use client::{AiConfig, AnthropicClient, CompletionSession, CompletionSource};
pub use error::AiError;
pub use model::{ChatMode, StreamEvent};

//! Shared application state
//!
//! Constructed once in `main` and injected into every handler via
//! `web::Data`; tests build a fresh state per case, so nothing leaks between
//! them.

use std::sync::Arc;

use codeloft_ai::AnthropicClient;
use codeloft_persistence::PersistenceService;

/// Application state shared across all request handlers
pub struct AppState {
    /// Storage backend chosen at startup; no runtime swap
    pub persistence: Arc<dyn PersistenceService>,
    /// Upstream completion client
    pub ai_client: Arc<AnthropicClient>,
}

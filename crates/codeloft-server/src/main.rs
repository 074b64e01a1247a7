//! Main entry point for the Codeloft API server.
//!
//! Selects the storage backend, builds the shared application state, and
//! runs the HTTP server until a shutdown signal arrives.

use std::sync::Arc;

use codeloft_ai::AnthropicClient;
use codeloft_persistence::{
    ExternalDbPersistService, MemoryPersistService, PersistenceService, StorageMode,
};
use codeloft_server::{
    model::{app_state::AppState, config::Configuration},
    startup,
};
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();
    startup::init_logging(&configuration.log_level());

    let storage_mode = configuration.storage_mode()?;
    info!("Persistence mode: {}", storage_mode);

    let persistence: Arc<dyn PersistenceService> = match storage_mode {
        StorageMode::ExternalDb => {
            let db = configuration.database_connection().await?;
            Arc::new(ExternalDbPersistService::new(db))
        }
        StorageMode::Memory => Arc::new(MemoryPersistService::new()),
    };
    persistence.health_check().await?;

    let ai_client = Arc::new(AnthropicClient::new(configuration.ai_config()));
    if !ai_client.has_api_key() {
        warn!("Anthropic API key not configured; chat streaming will report errors");
    }

    let address = configuration.server_address();
    let port = configuration.server_port();
    let app_state = Arc::new(AppState {
        persistence,
        ai_client,
    });

    info!("Starting Codeloft API server on {}:{}", address, port);
    let server = startup::api_server(app_state, address, port)?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = startup::wait_for_shutdown_signal() => {
            info!("Server shutting down gracefully");
        }
    }

    info!("Codeloft server shutdown complete");
    Ok(())
}

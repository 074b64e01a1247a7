//! Configuration management for the Codeloft server
//!
//! Settings come from an optional `conf/application` file, `CODELOFT__*`
//! environment variables, and CLI overrides, in that precedence order.

use std::time::Duration;

use clap::Parser;
use codeloft_common::CodeloftError;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use codeloft_ai::AiConfig;
use codeloft_persistence::StorageMode;

/// Default HTTP listen port
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(long = "address")]
    address: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(short = 's', long = "storage")]
    storage: Option<String>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(config::File::with_name("conf/application").required(false))
            .add_source(
                Environment::with_prefix("codeloft")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = args.address {
            config_builder = config_builder
                .set_override("server.address", v)
                .expect("Failed to set server address override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", v as i64)
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.storage {
            config_builder = config_builder
                .set_override("storage.mode", v)
                .expect("Failed to set storage mode override");
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration");

        Configuration { config: app_config }
    }

    /// Build a configuration from an already-assembled `Config` (tests)
    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .map(|p| p as u16)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn log_level(&self) -> String {
        self.config
            .get_string("log.level")
            .unwrap_or("info".to_string())
    }

    // ========================================================================
    // Storage Configuration
    // ========================================================================

    /// Selected storage mode; memory is the default so the server runs
    /// without any external service
    pub fn storage_mode(&self) -> Result<StorageMode, CodeloftError> {
        match self.config.get_string("storage.mode") {
            Ok(value) => value.parse().map_err(CodeloftError::ConfigError),
            Err(_) => Ok(StorageMode::Memory),
        }
    }

    /// Connect to the external database
    ///
    /// A missing `db.url` is a hard error: selecting the external backend
    /// without credentials must fail at startup, never fall back silently.
    pub async fn database_connection(&self) -> Result<DatabaseConnection, CodeloftError> {
        let url = self.config.get_string("db.url").map_err(|_| {
            CodeloftError::ConfigError(
                "storage.mode is external_db but db.url is not set".to_string(),
            )
        })?;

        let max_connections = self
            .config
            .get_int("db.pool.max_connections")
            .unwrap_or(20) as u32;
        let connect_timeout = self.config.get_int("db.pool.connect_timeout").unwrap_or(30) as u64;
        let acquire_timeout = self.config.get_int("db.pool.acquire_timeout").unwrap_or(30) as u64;

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout));

        tracing::info!(
            max_connections = max_connections,
            connect_timeout = connect_timeout,
            "Connecting to external database"
        );

        Database::connect(opt)
            .await
            .map_err(|e| CodeloftError::DatabaseError(e.to_string()))
    }

    // ========================================================================
    // Upstream AI Configuration
    // ========================================================================

    pub fn ai_config(&self) -> AiConfig {
        let mut ai = AiConfig::default();
        // The bare variable is what the hosting platforms conventionally set
        ai.api_key = self
            .config
            .get_string("anthropic.api_key")
            .ok()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok());
        if let Ok(model) = self.config.get_string("anthropic.model") {
            ai.model = model;
        }
        if let Ok(max_tokens) = self.config.get_int("anthropic.max_tokens") {
            ai.max_tokens = max_tokens as u32;
        }
        if let Ok(base_url) = self.config.get_string("anthropic.base_url") {
            ai.base_url = base_url;
        }
        ai
    }
}

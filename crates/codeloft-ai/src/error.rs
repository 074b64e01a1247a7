//! Error types for the streaming completion client

/// Errors produced while opening or consuming a completion session
#[derive(thiserror::Error, Debug)]
pub enum AiError {
    #[error("anthropic api key is not configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse stream event: {0}")]
    Parse(String),

    #[error("anthropic api error (status {status}): {message}")]
    Api { status: u16, message: String },
}

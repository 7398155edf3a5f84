//! CLI errors

use thiserror::Error;

use crate::http_server::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("boot failed: {0}")]
    Boot(String),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn boot(message: impl Into<String>) -> Self {
        Self::Boot(message.into())
    }
}

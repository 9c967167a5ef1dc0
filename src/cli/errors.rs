//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Store could not be opened or seeded
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// Database file already initialized
    #[error("database already initialized: {0}")]
    AlreadyInitialized(String),
}

// Error types for sysview

use thiserror::Error;

/// Result type alias using anyhow::Error
pub type Result<T> = anyhow::Result<T>;

/// Sysview-specific error types
#[derive(Error, Debug)]
pub enum SysviewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to enumerate unit files: {0}")]
    Discovery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for process management

use std::io;
use thiserror::Error;

/// Process management errors
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process
    #[error("Failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// I/O error while waiting on a running process
    #[error("Process I/O error: {0}")]
    Io(#[from] io::Error),

    /// Process timed out
    #[error("Process timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Failed to kill process
    #[error("Failed to kill process: {0}")]
    KillFailed(String),
}

/// Result type for process operations
pub type Result<T> = std::result::Result<T, ProcessError>;

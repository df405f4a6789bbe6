//! Error types for batch installation
//!
//! Only pipeline-level failures live here. A job whose command exits
//! non-zero is recorded as a [`JobResult`](crate::JobResult), never as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Worker for {} failed: {reason}", dir.display())]
    WorkerFailed { dir: PathBuf, reason: String },

    #[error("Job task failed: {0}")]
    TaskFailed(String),

    #[error("Interrupted before all jobs finished")]
    Interrupted,
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;

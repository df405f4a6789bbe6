// CLI error types

use rinstall_batch::BatchError;
use thiserror::Error;

/// CLI-specific errors
///
/// Every variant ends the process with exit status 1, except an interrupted
/// batch which exits with 130. Individual job failures never show up here;
/// they only affect the batch exit code.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'recursive-install --help' for usage information.",
                    message
                )
            }
            CliError::Batch(BatchError::InvalidConfig(msg)) => {
                format!(
                    "Invalid argument: {}\n\nRun 'recursive-install --help' for usage information.",
                    msg
                )
            }
            CliError::Batch(BatchError::RootNotFound(path)) => {
                format!(
                    "Root directory not found: {}\n\nCheck the value passed to --rootDir.",
                    path.display()
                )
            }
            CliError::Batch(BatchError::Interrupted) => {
                "Installation interrupted; running jobs were stopped.".to_string()
            }
            CliError::Batch(e) => format!("Error occurred during installation: {}", e),
            CliError::Io(e) => format!("File operation failed: {}", e),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Batch(BatchError::Interrupted) => 130,
            _ => 1,
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_config_points_to_help() {
        let err = CliError::from(BatchError::InvalidConfig(
            "concurrency must be at least 1".to_string(),
        ));
        let message = err.user_message();
        assert!(message.contains("concurrency must be at least 1"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn test_root_not_found_mentions_flag() {
        let err = CliError::from(BatchError::RootNotFound(PathBuf::from("/missing")));
        assert!(err.user_message().contains("--rootDir"));
        assert!(err.user_message().contains("/missing"));
    }

    #[test]
    fn test_interrupted_exit_code() {
        let err = CliError::from(BatchError::Interrupted);
        assert_eq!(err.exit_code(), 130);
        assert!(err.user_message().contains("interrupted"));

        let err = CliError::from(BatchError::RootNotFound(PathBuf::from("/missing")));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_worker_failure_is_reported_as_pipeline_error() {
        let err = CliError::from(BatchError::WorkerFailed {
            dir: PathBuf::from("/repo/pkg"),
            reason: "task panicked".to_string(),
        });
        assert!(err
            .user_message()
            .starts_with("Error occurred during installation"));
    }
}

//! Normalized outcome of running a command to completion

use std::fmt;
use std::process::ExitStatus;

/// Exit status used whenever a command did not report one of its own
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// How a command finished
///
/// Separates "the command ran and exited with code N" from the cases where
/// no exit code exists, so callers can decide which ones matter to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    /// Process exited normally with this code
    Exited(i32),
    /// Process was terminated by a signal
    Signalled,
    /// Process exceeded its timeout and was killed
    TimedOut { seconds: u64 },
    /// Process could not be started at all
    LaunchFailed(String),
}

impl CommandStatus {
    /// Exit code to report for this status
    ///
    /// Codes that cannot be represented as a positive failure (negative codes
    /// on Windows) collapse to [`FALLBACK_EXIT_CODE`] so that zero always
    /// means success.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandStatus::Exited(code) if *code >= 0 => *code,
            _ => FALLBACK_EXIT_CODE,
        }
    }

    /// True only for a normal exit with code 0
    pub fn success(&self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }

    /// True when the command never ran
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, CommandStatus::LaunchFailed(_))
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => CommandStatus::Exited(code),
            None => CommandStatus::Signalled,
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Exited(code) => write!(f, "exited with code {}", code),
            CommandStatus::Signalled => write!(f, "terminated by signal"),
            CommandStatus::TimedOut { seconds } => write!(f, "timed out after {}s", seconds),
            CommandStatus::LaunchFailed(reason) => write!(f, "failed to launch: {}", reason),
        }
    }
}

//! Process configuration

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for spawning a process
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Executable command
    pub command: String,
    /// Command arguments
    pub args: Vec<String>,
    /// Working directory (None = current dir)
    pub working_dir: Option<PathBuf>,
    /// Timeout for process execution (None = wait forever)
    pub timeout: Option<Duration>,
}

impl ProcessConfig {
    /// Create new process configuration
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: vec![],
            working_dir: None,
            timeout: None,
        }
    }

    /// Run a full command line through the platform shell
    ///
    /// Uses `sh -c` on Unix and `cmd /C` on Windows, so PATH lookup and
    /// package-manager shims behave exactly as they do in a terminal.
    pub fn shell(command_line: impl Into<String>) -> Self {
        let command_line = command_line.into();

        #[cfg(windows)]
        {
            Self::new("cmd").args(["/C".to_string(), command_line])
        }

        #[cfg(not(windows))]
        {
            Self::new("sh").args(["-c".to_string(), command_line])
        }
    }

    /// Set command arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set an optional timeout duration
    pub fn timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    /// Whether the process is spawned as leader of its own process group
    ///
    /// Only timed commands need their own group, so that a timeout can kill
    /// everything they started. Untimed commands share the caller's group and
    /// die with it on Ctrl-C.
    pub fn leads_process_group(&self) -> bool {
        self.timeout.is_some()
    }

    /// Human-readable command line, used in log fields
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}

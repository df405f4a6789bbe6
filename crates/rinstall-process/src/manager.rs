//! Process manager - spawning and running commands

use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::{
    child::ManagedChild,
    config::ProcessConfig,
    error::{ProcessError, Result},
    status::CommandStatus,
};

/// Spawns child processes and drives them to completion
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessManager;

impl ProcessManager {
    /// Create new process manager
    pub fn new() -> Self {
        Self
    }

    /// Spawn a managed process
    ///
    /// The child gets a null stdin and discarded stdout/stderr. On Unix a
    /// child with a timeout leads its own process group so the timeout can
    /// kill everything it started; see [`ProcessConfig::leads_process_group`].
    ///
    /// # Examples
    /// ```no_run
    /// use rinstall_process::{ProcessManager, ProcessConfig};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let manager = ProcessManager::new();
    /// let config = ProcessConfig::shell("npm install").working_dir("packages/web");
    /// let mut child = manager.spawn(config).await?;
    /// let status = child.wait().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn spawn(&self, config: ProcessConfig) -> Result<ManagedChild> {
        debug!(
            command = %config.command,
            args = ?config.args,
            working_dir = ?config.working_dir,
            "Spawning process"
        );

        let mut cmd = Command::new(&config.command);
        cmd.args(&config.args);

        if let Some(ref dir) = config.working_dir {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
        cmd.kill_on_drop(true);

        #[cfg(unix)]
        {
            if config.leads_process_group() {
                cmd.process_group(0);
            }
        }

        let child = cmd.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: config.display(),
            source,
        })?;

        let managed = ManagedChild::new(child, config);
        debug!(pid = %managed.pid(), "Process spawned");

        Ok(managed)
    }

    /// Run a command to completion and classify how it finished
    ///
    /// Never fails: spawn errors become [`CommandStatus::LaunchFailed`] and an
    /// elapsed timeout becomes [`CommandStatus::TimedOut`].
    pub async fn run(&self, config: ProcessConfig) -> CommandStatus {
        let command_line = config.display();

        let mut child = match self.spawn(config).await {
            Ok(child) => child,
            Err(e) => return CommandStatus::LaunchFailed(e.to_string()),
        };

        let status = match child.wait().await {
            Ok(status) => CommandStatus::from(status),
            Err(ProcessError::Timeout { seconds }) => CommandStatus::TimedOut { seconds },
            Err(e) => CommandStatus::LaunchFailed(e.to_string()),
        };

        debug!(command = %command_line, status = %status, "Process finished");
        status
    }
}

//! Managed child process wrapper

use std::process::ExitStatus;
use tokio::process::Child;
use tracing::{debug, warn};

use crate::{
    config::ProcessConfig,
    error::{ProcessError, Result},
};

/// SIGTERM→SIGKILL escalation delay
#[cfg(unix)]
const SIGKILL_TIMEOUT_MS: u64 = 200;

/// Wrapper around tokio::process::Child with timeout and tree-kill support
///
/// A child with a timeout leads its own process group. Dropping it while it
/// still runs kills that group, so aborting the task that owns it leaves no
/// grandchildren behind. Children without a timeout stay in the caller's
/// group and receive terminal signals (Ctrl-C, hang-up) along with it.
pub struct ManagedChild {
    /// Underlying tokio child process
    child: Child,
    /// Process configuration
    config: ProcessConfig,
    /// Process ID
    pid: u32,
    /// Child was spawned as leader of its own process group
    #[cfg(unix)]
    own_group: bool,
}

impl ManagedChild {
    pub(crate) fn new(child: Child, config: ProcessConfig) -> Self {
        let pid = child.id().unwrap_or(0);
        Self {
            #[cfg(unix)]
            own_group: config.leads_process_group(),
            child,
            config,
            pid,
        }
    }

    /// Get process ID
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Get process configuration
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Check if process is still running
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Wait for process to exit
    ///
    /// When the configuration carries a timeout and it elapses, the whole
    /// process tree is killed and [`ProcessError::Timeout`] is returned.
    pub async fn wait(&mut self) -> Result<ExitStatus> {
        let Some(timeout) = self.config.timeout else {
            return self.child.wait().await.map_err(Into::into);
        };

        match tokio::time::timeout(timeout, self.child.wait()).await {
            Ok(status) => status.map_err(Into::into),
            Err(_) => {
                warn!(
                    pid = %self.pid,
                    command = %self.config.display(),
                    timeout_secs = timeout.as_secs(),
                    "Process exceeded timeout, killing process tree"
                );
                self.kill_tree().await?;
                Err(ProcessError::Timeout {
                    seconds: timeout.as_secs(),
                })
            }
        }
    }

    /// Kill process tree (process and all descendants)
    ///
    /// - Windows: Uses `taskkill /pid <pid> /f /t`
    /// - Unix: Signals the child's process group with SIGTERM, then SIGKILL
    ///   after a short delay. A child sharing the caller's group is killed
    ///   on its own.
    pub async fn kill_tree(&mut self) -> Result<()> {
        debug!(pid = %self.pid, "Killing process tree");

        #[cfg(windows)]
        {
            use tokio::process::Command;

            let mut killer = Command::new("taskkill")
                .args(["/pid", &self.pid.to_string(), "/f", "/t"])
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .map_err(|e| ProcessError::KillFailed(e.to_string()))?;

            let _ = killer.wait().await;
        }

        #[cfg(unix)]
        {
            use nix::errno::Errno;
            use nix::sys::signal::{killpg, Signal};
            use nix::unistd::Pid;
            use std::time::Duration;

            if !self.own_group || self.pid == 0 {
                self.child
                    .kill()
                    .await
                    .map_err(|e| ProcessError::KillFailed(e.to_string()))?;
                return Ok(());
            }

            let pgid = Pid::from_raw(self.pid as i32);

            match killpg(pgid, Signal::SIGTERM) {
                Ok(()) => debug!(pid = %self.pid, "Sent SIGTERM to process group"),
                Err(Errno::ESRCH) => {}
                Err(e) => {
                    warn!(pid = %self.pid, error = %e, "Failed to send SIGTERM, killing process only");
                    self.child
                        .kill()
                        .await
                        .map_err(|e| ProcessError::KillFailed(e.to_string()))?;
                }
            }

            tokio::time::sleep(Duration::from_millis(SIGKILL_TIMEOUT_MS)).await;

            match killpg(pgid, Signal::SIGKILL) {
                Ok(()) => debug!(pid = %self.pid, "Sent SIGKILL to process group"),
                Err(Errno::ESRCH) => {}
                Err(e) => {
                    warn!(pid = %self.pid, error = %e, "Failed to send SIGKILL to process group");
                    let _ = self.child.kill().await;
                }
            }
        }

        // Reap the direct child so it does not linger as a zombie
        let _ = self.child.wait().await;
        Ok(())
    }
}

impl Drop for ManagedChild {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            if self.own_group && self.pid != 0 && self.is_running() {
                use nix::sys::signal::{killpg, Signal};
                use nix::unistd::Pid;

                debug!(pid = %self.pid, "Killing process group of abandoned child");
                let _ = killpg(Pid::from_raw(self.pid as i32), Signal::SIGKILL);
            }
        }
    }
}

//! Running a single job

use std::path::Path;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rinstall_process::{CommandStatus, ProcessConfig, ProcessManager};
use tracing::{debug, info, warn};

use crate::command::{CommandBuilder, JobCommands};
use crate::config::InstallConfig;
use crate::job::{Job, JobResult};

/// Runs one command line in a directory
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str, dir: &Path) -> CommandStatus;
}

/// Executes commands through the platform shell as child processes
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    manager: ProcessManager,
    timeout: Option<Duration>,
}

impl ShellExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            manager: ProcessManager::new(),
            timeout,
        }
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str, dir: &Path) -> CommandStatus {
        let config = ProcessConfig::shell(command)
            .working_dir(dir)
            .timeout(self.timeout);
        self.manager.run(config).await
    }
}

/// Turns a [`Job`] into a [`JobResult`]
///
/// Implementations never fail: a command that exits non-zero, crashes or
/// cannot be launched is reported through the result's exit code.
#[async_trait]
pub trait JobRunner: Send + Sync {
    async fn run(&self, job: &Job) -> JobResult;
}

/// Job runner that executes the commands from [`CommandBuilder`]
pub struct CommandJobRunner<E = ShellExecutor> {
    executor: E,
    builder: CommandBuilder,
}

impl CommandJobRunner<ShellExecutor> {
    /// Runner that spawns real processes using the batch settings
    pub fn from_config(config: &InstallConfig) -> Self {
        Self::new(ShellExecutor::new(config.timeout))
    }
}

impl<E: CommandExecutor> CommandJobRunner<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            builder: CommandBuilder::new(),
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn execute_commands(&self, dir: &Path, commands: &JobCommands) -> i32 {
        let mut exit_code = 0;

        if let Some(removal) = &commands.removal {
            let status = self.executor.execute(removal, dir).await;

            if commands.installs() {
                // best-effort: only a launch failure is worth mentioning
                if status.is_launch_failure() {
                    warn!(dir = ?dir, status = %status, "Removal step could not run");
                } else if !status.success() {
                    debug!(dir = ?dir, status = %status, "Ignoring removal step status");
                }
            } else {
                exit_code = status.exit_code();
            }
        }

        if let Some(install) = &commands.install {
            let status = self.executor.execute(install, dir).await;
            exit_code = status.exit_code();
        }

        exit_code
    }
}

#[async_trait]
impl<E: CommandExecutor> JobRunner for CommandJobRunner<E> {
    async fn run(&self, job: &Job) -> JobResult {
        let started = Instant::now();
        let commands = self.builder.commands(job);

        debug!(dir = ?job.dir, mode = %job.mode, "Running job");
        let exit_code = self.execute_commands(&job.dir, &commands).await;
        let result = JobResult::new(job.dir.clone(), exit_code, started.elapsed());

        if result.success() {
            debug!(dir = ?job.dir, elapsed_ms = result.duration.as_millis() as u64, "Job succeeded");
        } else {
            info!(dir = ?job.dir, exit_code, "Job failed");
        }

        result
    }
}

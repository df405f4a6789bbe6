//! # rinstall-batch
//!
//! Discovers package manifests beneath a root directory and runs an install
//! or cleanup job in each one, at most K at a time.
//!
//! ## Pipeline
//!
//! 1. [`ManifestLocator`] walks the root and returns manifest directories,
//!    pruning `node_modules` and hidden paths.
//! 2. Each directory becomes a [`Job`] carrying the batch [`InstallConfig`].
//! 3. [`BatchScheduler`] hands jobs to a [`JobRunner`] with bounded
//!    concurrency, reporting each completion to a [`ProgressSink`].
//! 4. [`BatchOutcome`] reduces the [`JobResult`]s to one exit code: the
//!    largest exit code seen, or 0.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rinstall_batch::{
//!     BatchScheduler, CommandJobRunner, InstallConfig, Job, ManifestLocator, NoProgress,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> rinstall_batch::Result<()> {
//! let config = InstallConfig::new("./monorepo").with_concurrency(3);
//! config.validate()?;
//!
//! let dirs = ManifestLocator::new().locate(&config.root_dir)?;
//! let jobs = Job::from_dirs(dirs, &config);
//!
//! let runner = Arc::new(CommandJobRunner::from_config(&config));
//! let scheduler = BatchScheduler::new(runner, config.concurrency)?;
//! let outcome = scheduler.run(jobs, &NoProgress).await?;
//!
//! std::process::exit(outcome.exit_code());
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod job;
pub mod locator;
pub mod outcome;
pub mod progress;
pub mod runner;
pub mod scheduler;

pub use command::{CommandBuilder, JobCommands, DEPENDENCY_DIR};
pub use config::{InstallConfig, InstallMode, PackageManager, DEFAULT_CONCURRENCY};
pub use error::{BatchError, Result};
pub use job::{Job, JobResult};
pub use locator::{exclude_root, ManifestLocator, MANIFEST_FILE};
pub use outcome::{aggregate_exit_code, BatchOutcome};
pub use progress::{NoProgress, ProgressSink, ProgressState};
pub use runner::{CommandExecutor, CommandJobRunner, JobRunner, ShellExecutor};
pub use scheduler::BatchScheduler;

pub use rinstall_process::CommandStatus;

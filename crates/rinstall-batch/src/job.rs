//! Jobs and their results

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{InstallConfig, InstallMode, PackageManager};

/// One directory's worth of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Directory containing the manifest; commands run here
    pub dir: PathBuf,
    pub mode: InstallMode,
    pub package_manager: PackageManager,
    pub production: bool,
}

impl Job {
    /// Create a job for `dir` using the batch-wide settings
    pub fn new(dir: impl Into<PathBuf>, config: &InstallConfig) -> Self {
        Self {
            dir: dir.into(),
            mode: config.mode,
            package_manager: config.package_manager,
            production: config.production,
        }
    }

    /// Create one job per directory, keeping discovery order
    pub fn from_dirs<I>(dirs: I, config: &InstallConfig) -> Vec<Job>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        dirs.into_iter().map(|dir| Job::new(dir, config)).collect()
    }
}

/// Outcome of running one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    /// Directory the job ran in
    pub dir: PathBuf,

    /// 0 on success, otherwise the failing command's exit code (or 1)
    pub exit_code: i32,

    /// Wall-clock time spent on the job
    pub duration: Duration,
}

impl JobResult {
    pub fn new(dir: impl Into<PathBuf>, exit_code: i32, duration: Duration) -> Self {
        Self {
            dir: dir.into(),
            exit_code,
            duration,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

//! Batch configuration

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BatchError, Result};

/// Default number of directories processed at once
pub const DEFAULT_CONCURRENCY: usize = 5;

/// What each job does to its directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallMode {
    /// Install dependencies
    Install,
    /// Delete the dependency directory and install nothing
    Clean,
    /// Delete the dependency directory, then install
    RemoveThenInstall,
}

impl InstallMode {
    /// Resolve the mode from the `clean` and `remove` flags
    ///
    /// `clean` takes precedence: with both set nothing is installed.
    pub fn from_flags(clean: bool, remove: bool) -> Self {
        match (clean, remove) {
            (true, _) => InstallMode::Clean,
            (false, true) => InstallMode::RemoveThenInstall,
            (false, false) => InstallMode::Install,
        }
    }

    /// Whether this mode runs the removal step
    pub fn removes(&self) -> bool {
        matches!(self, InstallMode::Clean | InstallMode::RemoveThenInstall)
    }

    /// Whether this mode runs the install step
    pub fn installs(&self) -> bool {
        matches!(self, InstallMode::Install | InstallMode::RemoveThenInstall)
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMode::Install => write!(f, "install"),
            InstallMode::Clean => write!(f, "clean"),
            InstallMode::RemoveThenInstall => write!(f, "remove-then-install"),
        }
    }
}

/// Package manager used for the install step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn from_yarn_flag(yarn: bool) -> Self {
        if yarn {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }
}

/// Configuration for one batch run
///
/// Built once from command-line flags and handed to the locator, the
/// runner and the scheduler.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Directory to scan for manifests
    pub root_dir: PathBuf,

    /// Leave the root directory's own manifest out of the job list
    pub skip_root: bool,

    /// What to do in each directory
    pub mode: InstallMode,

    /// Package manager for installs
    pub package_manager: PackageManager,

    /// Install production dependencies only
    pub production: bool,

    /// Maximum number of jobs in flight
    pub concurrency: usize,

    /// Per-command timeout
    pub timeout: Option<Duration>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            skip_root: false,
            mode: InstallMode::Install,
            package_manager: PackageManager::Npm,
            production: false,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: None,
        }
    }
}

impl InstallConfig {
    /// Create a configuration rooted at `root_dir` with default settings
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: InstallMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn with_skip_root(mut self, skip_root: bool) -> Self {
        self.skip_root = skip_root;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject settings the scheduler cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(BatchError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(BatchError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(InstallMode::from_flags(false, false), InstallMode::Install);
        assert_eq!(
            InstallMode::from_flags(false, true),
            InstallMode::RemoveThenInstall
        );
        assert_eq!(InstallMode::from_flags(true, false), InstallMode::Clean);
        assert_eq!(InstallMode::from_flags(true, true), InstallMode::Clean);
    }

    #[test]
    fn test_mode_steps() {
        assert!(!InstallMode::Install.removes());
        assert!(InstallMode::Install.installs());
        assert!(InstallMode::Clean.removes());
        assert!(!InstallMode::Clean.installs());
        assert!(InstallMode::RemoveThenInstall.removes());
        assert!(InstallMode::RemoveThenInstall.installs());
    }

    #[test]
    fn test_default_config() {
        let config = InstallConfig::default();
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert_eq!(config.mode, InstallMode::Install);
        assert!(!config.skip_root);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let config = InstallConfig::new("/repo").with_concurrency(0);
        assert!(matches!(
            config.validate(),
            Err(BatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = InstallConfig::new("/repo").with_timeout(Some(Duration::ZERO));
        assert!(config.validate().is_err());
    }
}

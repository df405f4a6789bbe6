//! Shell commands for each job

use crate::config::PackageManager;
use crate::job::Job;

/// Directory holding installed dependencies
pub const DEPENDENCY_DIR: &str = "node_modules";

#[cfg(not(windows))]
const REMOVE_COMMAND: &str = "rm -rf node_modules";

#[cfg(windows)]
const REMOVE_COMMAND: &str = "if exist node_modules rmdir /s /q node_modules";

/// Command lines a job runs, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCommands {
    /// Deletes the dependency directory
    pub removal: Option<String>,
    /// Installs dependencies
    pub install: Option<String>,
}

/// Maps a job's mode and package-manager settings to command lines
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBuilder;

impl CommandBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Commands for `job`
    pub fn commands(&self, job: &Job) -> JobCommands {
        let removal = job.mode.removes().then(|| self.removal_command());
        let install = job
            .mode
            .installs()
            .then(|| self.install_command(job.package_manager, job.production));

        JobCommands { removal, install }
    }

    /// Command that deletes the dependency directory; succeeds when it is absent
    pub fn removal_command(&self) -> String {
        REMOVE_COMMAND.to_string()
    }

    /// Command that installs dependencies
    ///
    /// yarn takes no extra flags; npm gets `--production` when requested.
    pub fn install_command(&self, package_manager: PackageManager, production: bool) -> String {
        match (package_manager, production) {
            (PackageManager::Yarn, _) => "yarn".to_string(),
            (PackageManager::Npm, true) => "npm install --production".to_string(),
            (PackageManager::Npm, false) => "npm install".to_string(),
        }
    }
}

impl JobCommands {
    /// Whether this set of commands installs anything
    pub fn installs(&self) -> bool {
        self.install.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InstallConfig, InstallMode};

    fn job(mode: InstallMode, package_manager: PackageManager, production: bool) -> Job {
        let config = InstallConfig::new("/repo")
            .with_mode(mode)
            .with_package_manager(package_manager)
            .with_production(production);
        Job::new("/repo/pkg", &config)
    }

    #[test]
    fn test_install_commands() {
        let builder = CommandBuilder::new();

        let commands = builder.commands(&job(InstallMode::Install, PackageManager::Npm, false));
        assert_eq!(commands.install.as_deref(), Some("npm install"));
        assert!(commands.removal.is_none());

        let commands = builder.commands(&job(InstallMode::Install, PackageManager::Npm, true));
        assert_eq!(commands.install.as_deref(), Some("npm install --production"));

        let commands = builder.commands(&job(InstallMode::Install, PackageManager::Yarn, true));
        assert_eq!(commands.install.as_deref(), Some("yarn"));
    }

    #[test]
    fn test_clean_never_installs() {
        let builder = CommandBuilder::new();
        let commands = builder.commands(&job(InstallMode::Clean, PackageManager::Yarn, false));

        assert!(!commands.installs());
        assert_eq!(commands.removal, Some(builder.removal_command()));
    }

    #[test]
    fn test_remove_then_install_has_both() {
        let builder = CommandBuilder::new();
        let commands = builder.commands(&job(
            InstallMode::RemoveThenInstall,
            PackageManager::Npm,
            false,
        ));

        assert!(commands.removal.is_some());
        assert_eq!(commands.install.as_deref(), Some("npm install"));
    }

    #[test]
    fn test_removal_targets_dependency_dir() {
        assert!(CommandBuilder::new().removal_command().contains(DEPENDENCY_DIR));
    }
}

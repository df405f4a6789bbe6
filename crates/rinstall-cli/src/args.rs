// Command-line flags

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rinstall_batch::{InstallConfig, InstallMode, PackageManager, DEFAULT_CONCURRENCY};

use crate::error::{CliError, CliResult};

/// Run npm/yarn install in every directory that has a package.json
#[derive(Parser, Debug, Clone)]
#[command(name = "recursive-install")]
#[command(bin_name = "recursive-install")]
#[command(about = "Install dependencies in every package.json directory below a root")]
#[command(version)]
pub struct Cli {
    /// Install only production dependencies
    #[arg(long)]
    pub production: bool,

    /// Root directory for recursive installation
    #[arg(long = "rootDir", visible_alias = "root-dir", value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Skip root package.json
    #[arg(long = "skipRoot", visible_alias = "skip-root")]
    pub skip_root: bool,

    /// Remove existing node_modules directories before installation
    #[arg(long)]
    pub remove: bool,

    /// Number of concurrent installations
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrent: usize,

    /// Remove existing node_modules directories without installation
    #[arg(long)]
    pub clean: bool,

    /// Use yarn instead of npm
    #[arg(long)]
    pub yarn: bool,

    /// Kill any single command that runs longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Flags listed in the argument report, in display order
pub const REPORTED_FLAGS: &[&str] = &[
    "production",
    "root_dir",
    "skip_root",
    "remove",
    "concurrent",
    "clean",
    "yarn",
    "timeout",
];

impl Cli {
    /// Build the batch configuration
    ///
    /// `cwd` is used when `--rootDir` is not given.
    pub fn to_config(&self, cwd: PathBuf) -> CliResult<InstallConfig> {
        if self.timeout == Some(0) {
            return Err(CliError::InvalidArgument {
                message: "--timeout must be greater than zero".to_string(),
            });
        }

        let config = InstallConfig {
            root_dir: self.root_dir.clone().unwrap_or(cwd),
            skip_root: self.skip_root,
            mode: InstallMode::from_flags(self.clean, self.remove),
            package_manager: PackageManager::from_yarn_flag(self.yarn),
            production: self.production,
            concurrency: self.concurrent,
            timeout: self.timeout.map(Duration::from_secs),
        };

        config.validate()?;
        Ok(config)
    }
}

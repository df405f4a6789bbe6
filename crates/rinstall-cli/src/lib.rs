// recursive-install command-line library

pub mod app;
pub mod args;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod report;
pub mod signal;

pub use app::{discover_jobs, run, run_jobs};
pub use args::{Cli, REPORTED_FLAGS};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, VerbosityLevel};
pub use progress::{create_progress_bar, InstallProgress};
pub use report::{ArgumentReport, MissingArgument, SuppliedArgument};
pub use signal::shutdown_signal;

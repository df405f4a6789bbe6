// Top-level flow: report arguments, discover, run the batch, print the banner

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use rinstall_batch::{
    exclude_root, BatchOutcome, BatchScheduler, CommandJobRunner, InstallConfig, Job,
    ManifestLocator, ProgressSink,
};
use tracing::{debug, info};

use crate::args::Cli;
use crate::error::CliResult;
use crate::logging::VerbosityLevel;
use crate::output::{self, OutputStyle};
use crate::progress::InstallProgress;
use crate::report::ArgumentReport;

/// Run a full batch and return the process exit code
///
/// `Err` means the pipeline itself failed or `shutdown` fired; the caller
/// prints it and exits with [`CliError::exit_code`](crate::CliError::exit_code).
/// Either way no job is still running when this returns.
pub async fn run<S>(
    cli: &Cli,
    report: &ArgumentReport,
    verbosity: VerbosityLevel,
    shutdown: S,
) -> CliResult<i32>
where
    S: Future<Output = ()>,
{
    let style = OutputStyle::default();
    print!("{}", report.render(&style));

    let cwd = std::env::current_dir()?;
    let config = cli.to_config(cwd)?;
    debug!(?config, "Resolved configuration");

    let jobs = discover_jobs(&config)?;

    println!("\n{}", style.header("Installation progress:"));
    let progress = if verbosity.shows_progress() {
        InstallProgress::new()
    } else {
        InstallProgress::hidden()
    };

    let outcome = run_jobs(&config, jobs, &progress, shutdown).await;
    if outcome.is_err() {
        progress.bar().abandon();
    }
    let outcome = outcome?;
    print_banner(&style, &outcome);

    Ok(outcome.exit_code())
}

/// Locate manifest directories and turn them into jobs
pub fn discover_jobs(config: &InstallConfig) -> CliResult<Vec<Job>> {
    let mut dirs: Vec<PathBuf> = ManifestLocator::new().locate(&config.root_dir)?;

    if config.skip_root {
        dirs = exclude_root(dirs, &config.root_dir);
    }

    info!(count = dirs.len(), root = ?config.root_dir, "Jobs discovered");
    Ok(Job::from_dirs(dirs, config))
}

/// Run `jobs` with real child processes until done or `shutdown` fires
pub async fn run_jobs<S>(
    config: &InstallConfig,
    jobs: Vec<Job>,
    progress: &dyn ProgressSink,
    shutdown: S,
) -> CliResult<BatchOutcome>
where
    S: Future<Output = ()>,
{
    let runner = Arc::new(CommandJobRunner::from_config(config));
    let scheduler = BatchScheduler::new(runner, config.concurrency)?;
    Ok(scheduler.run_until(jobs, progress, shutdown).await?)
}

fn print_banner(style: &OutputStyle, outcome: &BatchOutcome) {
    println!();
    if outcome.is_success() {
        output::print_success("All installations complete.");
        return;
    }

    println!("{}", style.success("All installations complete."));
    output::print_warning(&format!(
        "{} of {} directories failed (exit code {})",
        outcome.failed_count(),
        outcome.total(),
        outcome.exit_code()
    ));
    for dir in outcome.failed_dirs() {
        println!("{}", style.list_item(&dir.display().to_string()));
    }
}

// Live progress bar for a batch run

use indicatif::{ProgressBar, ProgressStyle};
use rinstall_batch::{BatchOutcome, JobResult, ProgressSink, ProgressState};

/// `[bar] current/total percent eta directory`
const BAR_TEMPLATE: &str = "[{bar:20}] {pos}/{len} {percent}% {eta} {msg}";

/// Create the installation progress bar for `total` directories
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|e| {
            eprintln!("Failed to create progress bar template: {}", e);
            ProgressStyle::default_bar()
        })
        .progress_chars("= ");
    pb.set_style(style);
    pb
}

/// Drives an indicatif bar from scheduler progress events
pub struct InstallProgress {
    bar: ProgressBar,
}

impl InstallProgress {
    /// Visible progress bar on stderr
    pub fn new() -> Self {
        Self {
            bar: create_progress_bar(0),
        }
    }

    /// Progress sink that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl Default for InstallProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for InstallProgress {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn job_completed(&self, state: ProgressState, result: &JobResult) {
        self.bar.set_message(result.dir.display().to_string());
        self.bar.set_position(state.completed() as u64);
    }

    fn finished(&self, _outcome: &BatchOutcome) {
        self.bar.finish();
    }
}

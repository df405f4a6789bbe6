//! Combining job results into one exit status

use std::path::Path;

use crate::job::JobResult;

/// Largest exit code in `codes`, or 0 when empty
pub fn aggregate_exit_code<I>(codes: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    codes.into_iter().fold(0, i32::max)
}

/// Result of a whole batch run
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    exit_code: i32,
    results: Vec<JobResult>,
}

impl BatchOutcome {
    /// Aggregate job results; the exit code does not depend on their order
    pub fn from_results(results: Vec<JobResult>) -> Self {
        let exit_code = aggregate_exit_code(results.iter().map(|r| r.exit_code));
        Self { exit_code, results }
    }

    /// Process exit status for the batch
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Results in completion order
    pub fn results(&self) -> &[JobResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Directories whose job failed
    pub fn failed_dirs(&self) -> impl Iterator<Item = &Path> {
        self.results
            .iter()
            .filter(|r| !r.success())
            .map(|r| r.dir.as_path())
    }

    pub fn failed_count(&self) -> usize {
        self.failed_dirs().count()
    }
}

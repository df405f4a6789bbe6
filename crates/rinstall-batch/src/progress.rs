//! Batch progress tracking

use crate::job::JobResult;
use crate::outcome::BatchOutcome;

/// Completed vs. total jobs for a running batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    total: usize,
    completed: usize,
}

impl ProgressState {
    /// Snapshot with `completed` of `total` jobs done
    pub fn at(total: usize, completed: usize) -> Self {
        Self {
            total,
            completed: completed.min(total),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    /// Percentage complete; an empty batch counts as 100%
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed * 100) / self.total).min(100) as u8
    }
}

/// Receives progress updates from the scheduler
///
/// Calls arrive from the single scheduling loop, one `job_completed` per
/// finished job, between one `started` and one `finished`.
pub trait ProgressSink: Send + Sync {
    /// Batch is about to start `total` jobs
    fn started(&self, _total: usize) {}

    /// A job finished, successfully or not
    fn job_completed(&self, state: ProgressState, result: &JobResult);

    /// Every job has finished
    fn finished(&self, _outcome: &BatchOutcome) {}
}

/// Discards progress updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn job_completed(&self, _state: ProgressState, _result: &JobResult) {}
}

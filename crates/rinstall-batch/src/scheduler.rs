//! Bounded-concurrency batch scheduling

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::{BatchError, Result};
use crate::job::{Job, JobResult};
use crate::outcome::BatchOutcome;
use crate::progress::{ProgressSink, ProgressState};
use crate::runner::JobRunner;

/// What a job task hands back: its directory and the result, or the panic message
type TaskOutput = (PathBuf, std::result::Result<JobResult, String>);

/// Runs every job with at most `concurrency` in flight
///
/// Jobs are admitted in the order given. Whenever one finishes the next
/// waiting job starts immediately, so a fast directory never leaves a slot
/// idle. Completion order is whatever the child processes produce.
///
/// Each job runs on its own tokio task owned by a [`JoinSet`]; the loop in
/// [`BatchScheduler::run_until`] is the only place that touches progress and
/// results. No task outlives a call: on a pipeline failure or shutdown the
/// remaining tasks are aborted and awaited, which drops (and kills) their
/// child processes.
pub struct BatchScheduler<R> {
    runner: Arc<R>,
    concurrency: usize,
}

impl<R: JobRunner + 'static> BatchScheduler<R> {
    /// Create a scheduler; `concurrency` must be at least 1
    pub fn new(runner: Arc<R>, concurrency: usize) -> Result<Self> {
        if concurrency == 0 {
            return Err(BatchError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            runner,
            concurrency,
        })
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Run all jobs to completion
    ///
    /// Failing jobs are recorded and never stop the batch. An `Err` means the
    /// scheduling itself broke (a job task panicked or was cancelled).
    pub async fn run(&self, jobs: Vec<Job>, progress: &dyn ProgressSink) -> Result<BatchOutcome> {
        self.run_until(jobs, progress, std::future::pending()).await
    }

    /// Run all jobs, stopping early when `shutdown` resolves
    ///
    /// On shutdown every running job is aborted and
    /// [`BatchError::Interrupted`] is returned once they are gone.
    pub async fn run_until<S>(
        &self,
        jobs: Vec<Job>,
        progress: &dyn ProgressSink,
        shutdown: S,
    ) -> Result<BatchOutcome>
    where
        S: Future<Output = ()>,
    {
        let total = jobs.len();
        progress.started(total);

        info!(jobs = total, concurrency = self.concurrency, "Starting batch");

        tokio::pin!(shutdown);
        let mut waiting = jobs.into_iter();
        let mut running: JoinSet<TaskOutput> = JoinSet::new();
        let mut results = Vec::with_capacity(total);

        loop {
            while running.len() < self.concurrency {
                match waiting.next() {
                    Some(job) => self.spawn_job(&mut running, job),
                    None => break,
                }
            }

            if running.is_empty() {
                break;
            }

            let next = tokio::select! {
                joined = running.join_next() => Some(joined),
                _ = &mut shutdown => None,
            };

            let Some(joined) = next else {
                warn!(running = running.len(), "Shutdown requested, stopping running jobs");
                running.shutdown().await;
                return Err(BatchError::Interrupted);
            };

            let Some(joined) = joined else {
                break;
            };

            let result = match joined {
                Ok((_, Ok(result))) => result,
                Ok((dir, Err(reason))) => {
                    error!(dir = ?dir, reason = %reason, "Job task panicked");
                    running.shutdown().await;
                    return Err(BatchError::WorkerFailed { dir, reason });
                }
                Err(e) => {
                    error!(error = %e, "Job task did not complete");
                    running.shutdown().await;
                    return Err(BatchError::TaskFailed(e.to_string()));
                }
            };

            let state = ProgressState::at(total, results.len() + 1);
            debug!(
                dir = ?result.dir,
                exit_code = result.exit_code,
                completed = state.completed(),
                total = state.total(),
                "Job completed"
            );
            progress.job_completed(state, &result);
            results.push(result);
        }

        let outcome = BatchOutcome::from_results(results);
        info!(
            exit_code = outcome.exit_code(),
            failed = outcome.failed_count(),
            "Batch finished"
        );
        progress.finished(&outcome);

        Ok(outcome)
    }

    fn spawn_job(&self, running: &mut JoinSet<TaskOutput>, job: Job) {
        let runner = Arc::clone(&self.runner);
        running.spawn(async move {
            let outcome = AssertUnwindSafe(runner.run(&job))
                .catch_unwind()
                .await
                .map_err(panic_message);
            (job.dir, outcome)
        });
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("job panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("job panicked: {}", msg)
    } else {
        "job panicked".to_string()
    }
}

//! Property-based tests for the batch scheduler and result aggregation
//!
//! Covers the concurrency ceiling, progress accounting and the
//! order-independence of the aggregated exit code.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;
use rinstall_batch::{
    aggregate_exit_code, BatchOutcome, BatchScheduler, InstallConfig, Job, JobResult, JobRunner,
    ProgressSink, ProgressState,
};

// ============================================================================
// Test doubles
// ============================================================================

/// Returns a scripted exit code per job after a scripted delay
struct ScriptedRunner {
    plan: Vec<(u64, i32)>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedRunner {
    fn new(plan: Vec<(u64, i32)>) -> Self {
        Self {
            plan,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn index_of(job: &Job) -> usize {
        job.dir
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix("pkg"))
            .and_then(|n| n.parse().ok())
            .expect("job dir should be named pkgN")
    }
}

#[async_trait]
impl JobRunner for ScriptedRunner {
    async fn run(&self, job: &Job) -> JobResult {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let (delay_ms, exit_code) = self.plan[Self::index_of(job)];
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        JobResult::new(job.dir.clone(), exit_code, Duration::from_millis(delay_ms))
    }
}

#[derive(Default)]
struct TickCounter {
    ticks: Mutex<Vec<ProgressState>>,
}

impl ProgressSink for TickCounter {
    fn job_completed(&self, state: ProgressState, _result: &JobResult) {
        self.ticks.lock().unwrap().push(state);
    }
}

#[derive(Default)]
struct OrderRecorder {
    dirs: Mutex<Vec<PathBuf>>,
}

impl ProgressSink for OrderRecorder {
    fn job_completed(&self, _state: ProgressState, result: &JobResult) {
        self.dirs.lock().unwrap().push(result.dir.clone());
    }
}

fn jobs_for(plan: &[(u64, i32)]) -> Vec<Job> {
    let config = InstallConfig::default();
    (0..plan.len())
        .map(|i| Job::new(PathBuf::from(format!("/repo/pkg{}", i)), &config))
        .collect()
}

// ============================================================================
// Generators
// ============================================================================

fn arb_plan() -> impl Strategy<Value = Vec<(u64, i32)>> {
    prop::collection::vec((1u64..8, prop_oneof![4 => Just(0i32), 1 => 1i32..130]), 0..24)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Exactly min(K, n) jobs run at the busiest moment, every job completes
    /// exactly once, and the batch exit code is the maximum job exit code.
    ///
    /// Runs on a paused clock so the first K jobs are all in flight before
    /// any of their delays elapse.
    #[test]
    fn prop_scheduler_honours_ceiling_and_accounting(
        plan in arb_plan(),
        concurrency in 1usize..6,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let runner = Arc::new(ScriptedRunner::new(plan.clone()));
        let sink = TickCounter::default();

        let outcome = runtime.block_on(async {
            let scheduler = BatchScheduler::new(runner.clone(), concurrency).unwrap();
            scheduler.run(jobs_for(&plan), &sink).await.unwrap()
        });

        prop_assert_eq!(
            runner.max_in_flight.load(Ordering::SeqCst),
            concurrency.min(plan.len())
        );

        let ticks = sink.ticks.lock().unwrap();
        prop_assert_eq!(ticks.len(), plan.len());
        if let Some(last) = ticks.last() {
            prop_assert_eq!(last.completed(), last.total());
        }
        for (i, state) in ticks.iter().enumerate() {
            prop_assert_eq!(state.completed(), i + 1);
            prop_assert_eq!(state.total(), plan.len());
        }

        let expected = plan.iter().map(|(_, code)| *code).max().unwrap_or(0);
        prop_assert_eq!(outcome.exit_code(), expected);
        prop_assert_eq!(outcome.total(), plan.len());
    }

    /// A slot freed by a fast job is refilled at once: with one long job
    /// holding a slot, every short job still finishes before it.
    #[test]
    fn prop_short_jobs_overtake_long_job(
        short_jobs in 1usize..12,
        concurrency in 2usize..5,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();

        let mut plan = vec![(1_000u64, 0i32)];
        plan.extend(std::iter::repeat((5u64, 0i32)).take(short_jobs));
        let runner = Arc::new(ScriptedRunner::new(plan.clone()));
        let sink = OrderRecorder::default();

        runtime.block_on(async {
            let scheduler = BatchScheduler::new(runner.clone(), concurrency).unwrap();
            scheduler.run(jobs_for(&plan), &sink).await.unwrap();
        });

        let order = sink.dirs.lock().unwrap();
        prop_assert_eq!(order.len(), plan.len());
        prop_assert_eq!(order.last(), Some(&PathBuf::from("/repo/pkg0")));
    }

    /// The aggregated exit code does not depend on completion order.
    #[test]
    fn prop_outcome_is_order_independent(
        codes in prop::collection::vec(0i32..256, 0..32),
        seed in any::<u64>(),
    ) {
        let results: Vec<JobResult> = codes
            .iter()
            .enumerate()
            .map(|(i, code)| JobResult::new(format!("/repo/pkg{}", i), *code, Duration::ZERO))
            .collect();

        let mut shuffled = results.clone();
        let len = shuffled.len();
        if len > 1 {
            let k = (seed as usize) % len;
            shuffled.rotate_left(k);
            shuffled.reverse();
        }

        let a = BatchOutcome::from_results(results);
        let b = BatchOutcome::from_results(shuffled);
        prop_assert_eq!(a.exit_code(), b.exit_code());
        prop_assert_eq!(a.exit_code(), aggregate_exit_code(codes.iter().copied()));
        prop_assert_eq!(a.is_success(), codes.iter().all(|c| *c == 0));
    }
}

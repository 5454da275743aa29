//! Benchmark Execution
//!
//! Runs a plan strictly sequentially: one dataset generation and one sort
//! per task, in plan order, with an optional bounded pause between tasks so
//! an interactive host stays responsive. Results accumulate privately and
//! are published as a whole only when the loop finishes.
//!
//! ## Data Flow
//!
//! ```text
//! ExecutionPlan (ordered BenchmarkTasks)
//!        │
//!        ▼
//! ┌──────────────┐   per task: progress event → pause → generate → sort
//! │   Executor   │
//! └──────┬───────┘
//!        │
//!        ▼
//! Vec<BenchmarkResult>  (one per task, fresh UUID each)
//! ```
//!
//! A quick-sort run contained at its recursion cap is recorded as
//! `Partial` with a diagnostic message and the run continues; only an
//! empty plan or a dataset boundary violation aborts the run, and both
//! happen before any sort executes.

use crate::planner::{BenchmarkTask, ExecutionPlan, PlanError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortbench_core::{DatasetError, MAX_QUICK_DEPTH, generate, run_algorithm};
use sortbench_report::{BenchmarkResult, RunStatus};
use std::time::Duration;
use thiserror::Error;

/// Default inter-task pause, matching the reference cooperative yield.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(50);

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Pause between consecutive tasks; `Duration::ZERO` disables it for
    /// headless batch runs.
    pub pause: Duration,
    /// Fixed seed for `Random` dataset generation; `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            pause: DEFAULT_PAUSE,
            seed: None,
        }
    }
}

/// Why a run aborted before (or without) executing any task.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The plan had no runnable tasks.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// A dataset request was rejected at the generation boundary.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Progress event emitted as each task starts.
#[derive(Debug, Clone, Copy)]
pub struct TaskProgress<'a> {
    /// Zero-based index of the starting task.
    pub index: usize,
    /// Total tasks in the plan.
    pub total: usize,
    /// The task that is starting.
    pub task: &'a BenchmarkTask,
}

/// Sequential in-process benchmark executor.
#[derive(Debug, Default)]
pub struct Executor {
    config: ExecutionConfig,
}

impl Executor {
    /// Create an executor with the given configuration.
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Execute every task in the plan, in order, emitting `on_progress` as
    /// each task starts. Returns one result per task; errors only before
    /// any task has run.
    pub fn execute(
        &self,
        plan: &ExecutionPlan,
        mut on_progress: impl FnMut(TaskProgress<'_>),
    ) -> Result<Vec<BenchmarkResult>, ExecutionError> {
        if plan.tasks.is_empty() {
            return Err(PlanError::NoRunnableTasks {
                skipped: plan.skipped,
            }
            .into());
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let total = plan.tasks.len();
        let mut results = Vec::with_capacity(total);

        for (index, task) in plan.tasks.iter().enumerate() {
            on_progress(TaskProgress { index, total, task });

            if !self.config.pause.is_zero() {
                std::thread::sleep(self.config.pause);
            }

            let data = generate(task.size, task.scenario, &mut rng)?;
            let run = run_algorithm(task.algorithm, &data);

            let (status, error_message) = if run.depth_limited {
                (
                    RunStatus::Partial,
                    Some(format!(
                        "recursion contained at depth {}; metrics are partial",
                        MAX_QUICK_DEPTH
                    )),
                )
            } else {
                (RunStatus::Passed, None)
            };

            results.push(BenchmarkResult {
                id: uuid::Uuid::new_v4().to_string(),
                algorithm: task.algorithm,
                size: task.size,
                scenario: task.scenario,
                metrics: run.metrics,
                status,
                error_message,
            });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Selection, build_plan};
    use sortbench_core::{Algorithm, Scenario};
    use std::collections::HashSet;

    fn batch_config() -> ExecutionConfig {
        ExecutionConfig {
            pause: Duration::ZERO,
            seed: Some(1234),
        }
    }

    #[test]
    fn end_to_end_two_algorithms_one_size() {
        let selection = Selection::new(
            vec![Algorithm::Bubble, Algorithm::Quick],
            vec![100],
            vec![Scenario::Random],
        );
        let plan = build_plan(&selection);
        let mut progress_events = 0;
        let results = Executor::new(batch_config())
            .execute(&plan, |_| progress_events += 1)
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(progress_events, 2);
        assert_eq!(results[0].algorithm, Algorithm::Bubble);
        assert_eq!(results[1].algorithm, Algorithm::Quick);

        let ids: HashSet<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 2, "result ids must be distinct");

        for r in &results {
            assert_eq!(r.size, 100);
            assert_eq!(r.scenario, Scenario::Random);
            assert_eq!(r.status, RunStatus::Passed);
            assert!(r.metrics.time_ms >= 0.0);
            assert!(r.metrics.comparisons > 0);
        }
    }

    #[test]
    fn results_follow_plan_order() {
        let selection = Selection::new(
            vec![Algorithm::Merge, Algorithm::Quick],
            vec![100, 1000],
            vec![Scenario::Sorted, Scenario::Reverse],
        );
        let plan = build_plan(&selection);
        let results = Executor::new(batch_config())
            .execute(&plan, |_| {})
            .unwrap();

        assert_eq!(results.len(), plan.tasks.len());
        for (r, t) in results.iter().zip(&plan.tasks) {
            assert_eq!(r.algorithm, t.algorithm);
            assert_eq!(r.size, t.size);
            assert_eq!(r.scenario, t.scenario);
        }
    }

    #[test]
    fn empty_plan_aborts_before_execution() {
        let selection = Selection::new(vec![Algorithm::Bubble], vec![20_000], vec![Scenario::Random]);
        let plan = build_plan(&selection);
        let mut progress_events = 0;
        let err = Executor::new(batch_config())
            .execute(&plan, |_| progress_events += 1)
            .unwrap_err();

        assert_eq!(progress_events, 0, "no task may start");
        match err {
            ExecutionError::Plan(PlanError::NoRunnableTasks { skipped }) => assert_eq!(skipped, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fixed_seed_reproduces_comparison_counts() {
        let selection = Selection::new(vec![Algorithm::Quick], vec![1000], vec![Scenario::Random]);
        let plan = build_plan(&selection);
        let executor = Executor::new(batch_config());
        let a = executor.execute(&plan, |_| {}).unwrap();
        let b = executor.execute(&plan, |_| {}).unwrap();
        assert_eq!(a[0].metrics.comparisons, b[0].metrics.comparisons);
        assert_eq!(a[0].metrics.swaps, b[0].metrics.swaps);
    }

    #[test]
    fn contained_quick_sort_reports_partial_and_run_continues() {
        // Sorted input past the recursion cap forces containment; the
        // following task must still execute.
        let selection = Selection::new(
            vec![Algorithm::Quick, Algorithm::Merge],
            vec![6000],
            vec![Scenario::Sorted],
        );
        let plan = build_plan(&selection);
        let results = Executor::new(batch_config())
            .execute(&plan, |_| {})
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, RunStatus::Partial);
        assert!(results[0].error_message.is_some());
        assert!(results[0].metrics.comparisons > 0);
        assert_eq!(results[1].status, RunStatus::Passed);
    }
}

//! Benchmark Planner
//!
//! Expands a selection of algorithms, sizes, and scenarios into the
//! Cartesian-product task list, applying the quadratic-algorithm safety
//! filter before anything executes.
//!
//! Ordering is deterministic and matches the enumeration order of the
//! selection: size, then scenario, then algorithm (outer to inner), each in
//! the order it was originally selected.

use sortbench_core::{Algorithm, Scenario};
use thiserror::Error;

/// Input size at or above which O(N^2) algorithms are excluded from
/// execution, bounding worst-case run time.
pub const DANGER_SIZE_THRESHOLD: usize = 20_000;

/// Whether a task pairing would be dropped by the safety filter.
pub fn is_dangerous_combination(algorithm: Algorithm, size: usize) -> bool {
    algorithm.is_quadratic() && size >= DANGER_SIZE_THRESHOLD
}

/// One planned algorithm/size/scenario combination. Transient: created by
/// the planner, discarded after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkTask {
    /// Algorithm to measure.
    pub algorithm: Algorithm,
    /// Input size.
    pub size: usize,
    /// Input shape.
    pub scenario: Scenario,
}

/// The sets the user selected, in selection order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Algorithms to benchmark.
    pub algorithms: Vec<Algorithm>,
    /// Input sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Input shapes to benchmark.
    pub scenarios: Vec<Scenario>,
}

impl Selection {
    /// Build a selection, dropping duplicates while preserving first-seen
    /// order so task enumeration stays deterministic.
    pub fn new(algorithms: Vec<Algorithm>, sizes: Vec<usize>, scenarios: Vec<Scenario>) -> Self {
        Self {
            algorithms: dedup_preserving_order(algorithms),
            sizes: dedup_preserving_order(sizes),
            scenarios: dedup_preserving_order(scenarios),
        }
    }
}

fn dedup_preserving_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Ordered task list plus a count of combinations the safety filter
/// dropped.
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    /// Tasks in execution order.
    pub tasks: Vec<BenchmarkTask>,
    /// Combinations dropped by the safety filter.
    pub skipped: usize,
}

/// Selection produced nothing runnable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Every selected combination was empty or filtered out.
    #[error(
        "no runnable benchmark tasks: {skipped} combination(s) were excluded by the \
         safety filter (quadratic algorithms are skipped at sizes >= 20000)"
    )]
    NoRunnableTasks {
        /// Combinations the safety filter dropped.
        skipped: usize,
    },
}

/// Expand a selection into an execution plan.
pub fn build_plan(selection: &Selection) -> ExecutionPlan {
    let mut tasks = Vec::new();
    let mut skipped = 0;

    for &size in &selection.sizes {
        for &scenario in &selection.scenarios {
            for &algorithm in &selection.algorithms {
                if is_dangerous_combination(algorithm, size) {
                    skipped += 1;
                } else {
                    tasks.push(BenchmarkTask {
                        algorithm,
                        size,
                        scenario,
                    });
                }
            }
        }
    }

    ExecutionPlan { tasks, skipped }
}

#![warn(missing_docs)]
//! # SortBench
//!
//! Reproducible, instrumented benchmarks of comparison-based sorting
//! algorithms across controllable input sizes and data distributions.
//!
//! SortBench measures elapsed time, comparison count, and data-movement
//! count for five classic variants (bubble, selection, insertion, quick,
//! merge) over three input shapes (random permutation, ascending,
//! descending):
//! - **Deterministic datasets**: every input is a permutation of `0..N`,
//!   and random shapes come from an unbiased Fisher-Yates shuffle of a
//!   seedable RNG
//! - **Faithful counters**: each algorithm's original counting convention
//!   is preserved, quirks included; `swaps` is a per-algorithm unit
//! - **Safety filter**: quadratic algorithms are never run at sizes that
//!   would make a run unbounded in practice
//! - **Contained failures**: pathological quick-sort recursion is capped
//!   and reported as a partial result instead of crashing the run
//! - **Aggregation**: scenario-averaged, size-ordered series ready for a
//!   chart or table, with log-scale-safe flooring
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sortbench::run()
//! }
//! ```
//!
//! ## Library Use
//!
//! ```ignore
//! use sortbench::prelude::*;
//!
//! let selection = Selection::new(
//!     vec![Algorithm::Quick, Algorithm::Merge],
//!     vec![100, 1000],
//!     vec![Scenario::Random],
//! );
//! let plan = build_plan(&selection);
//! let results = Executor::new(ExecutionConfig::default()).execute(&plan, |_| {})?;
//! ```

// Re-export core types
pub use sortbench_core::{
    Algorithm, DatasetError, MAX_QUICK_DEPTH, Scenario, SortMetrics, SortRun, bubble_sort,
    generate, insertion_sort, merge_sort, quick_sort, run_algorithm, selection_sort,
};

// Re-export report types
pub use sortbench_report::{
    BenchmarkResult, Metric, MetricSeries, Report, ReportMeta, ReportSummary, RunStatus,
    ScenarioFilter, build_series, generate_json_report,
};

// Re-export planning and execution
pub use sortbench_cli::{
    BenchmarkTask, DANGER_SIZE_THRESHOLD, ExecutionConfig, ExecutionError, ExecutionPlan,
    Executor, OutputFormat, PlanError, Selection, TaskProgress, build_plan,
    format_human_output, format_series, is_dangerous_combination,
};

/// Run the SortBench CLI harness.
///
/// Call this from your binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     sortbench::run()
/// }
/// ```
pub use sortbench_cli::run;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, BenchmarkResult, ExecutionConfig, Executor, Metric, Report, Scenario,
        ScenarioFilter, Selection, build_plan, build_series, run_algorithm,
    };
}

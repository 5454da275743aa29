//! Instrumentation Counters
//!
//! `SortMetrics` is the per-run measurement record. The `swaps` field is a
//! per-algorithm unit of data movement, NOT a uniform count: bubble and
//! selection count element swaps, insertion counts single-position shifts,
//! quick sort counts Lomuto repositionings (self-swaps and the final pivot
//! placement included), and merge sort counts every element appended to an
//! output run. Cross-algorithm comparisons on `swaps` are directional only;
//! each variant's convention is preserved verbatim for comparability with
//! the reference measurements.

use serde::{Deserialize, Serialize};

/// Measurements collected from a single sort execution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortMetrics {
    /// Wall-clock time of the sort body in fractional milliseconds.
    /// Excludes the defensive input copy.
    pub time_ms: f64,
    /// Element-to-element ordering tests performed.
    pub comparisons: u64,
    /// Data-movement units performed (see module docs for the per-algorithm
    /// definition).
    pub swaps: u64,
}

/// Output of one instrumented sort.
#[derive(Debug, Clone, PartialEq)]
pub struct SortRun {
    /// The sorted sequence. When `depth_limited` is set this is only
    /// partially ordered.
    pub output: Vec<u32>,
    /// Counters and timing for this run.
    pub metrics: SortMetrics,
    /// Quick sort abandoned its recursion at the depth cap; `metrics` holds
    /// whatever was accumulated up to that point.
    pub depth_limited: bool,
}

impl SortRun {
    pub(crate) fn complete(output: Vec<u32>, metrics: SortMetrics) -> Self {
        Self {
            output,
            metrics,
            depth_limited: false,
        }
    }
}

/// Mutable comparison/swap accumulator threaded through the recursive
/// variants.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    pub(crate) fn into_metrics(self, time_ms: f64) -> SortMetrics {
        SortMetrics {
            time_ms,
            comparisons: self.comparisons,
            swaps: self.swaps,
        }
    }
}

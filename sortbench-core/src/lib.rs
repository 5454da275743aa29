#![warn(missing_docs)]
//! SortBench Core - Measurement Primitives
//!
//! This crate provides the leaf components of the benchmark engine:
//! - `Algorithm` and `Scenario` identifiers shared across the workspace
//! - Deterministic dataset generation (identity / reversed / Fisher-Yates)
//! - Five instrumented sorting variants with per-algorithm comparison and
//!   swap counters plus wall-clock timing
//!
//! Everything here is pure with respect to its inputs: sorts never mutate
//! the caller's data, and dataset generation draws only from the RNG the
//! caller passes in.

mod dataset;
mod metrics;
mod sorts;

pub use dataset::{DatasetError, generate};
pub use metrics::{SortMetrics, SortRun};
pub use sorts::{
    MAX_QUICK_DEPTH, bubble_sort, insertion_sort, merge_sort, quick_sort, run_algorithm,
    selection_sort,
};

use serde::{Deserialize, Serialize};

/// Sorting algorithm variants covered by the benchmark suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent-pair passes with early exit on a swap-free pass
    Bubble,
    /// Minimum scan per position, at most one swap per position
    Selection,
    /// Leftward key shifting into the sorted prefix
    Insertion,
    /// Lomuto partitioning, last element as pivot
    Quick,
    /// Top-down split and merge
    Merge,
}

impl Algorithm {
    /// All variants in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Stable identifier, also used as an opaque lookup key by external
    /// collaborators (e.g. code-generation keyed by algorithm).
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Human-readable name for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Whether the variant is O(N^2); these are excluded from large inputs
    /// by the planner's safety filter.
    pub fn is_quadratic(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        )
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            "merge" | "mergesort" => Ok(Algorithm::Merge),
            other => Err(format!("Unknown algorithm: {}", other)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Shape of the input sequence handed to an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Uniform random permutation of `0..N`
    Random,
    /// Identity permutation (already ascending)
    Sorted,
    /// Reversed identity permutation (descending)
    Reverse,
}

impl Scenario {
    /// All variants in canonical order.
    pub const ALL: [Scenario; 3] = [Scenario::Random, Scenario::Sorted, Scenario::Reverse];

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Scenario::Random => "random",
            Scenario::Sorted => "sorted",
            Scenario::Reverse => "reverse",
        }
    }

    /// Human-readable name for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Random => "Random",
            Scenario::Sorted => "Sorted",
            Scenario::Reverse => "Reverse",
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Scenario::Random),
            "sorted" => Ok(Scenario::Sorted),
            "reverse" | "reversed" => Ok(Scenario::Reverse),
            other => Err(format!("Unknown scenario: {}", other)),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

//! Series Aggregation
//!
//! Reshapes a flat result list into the size-ordered, per-algorithm series
//! a chart or table consumes: arithmetic mean of one metric over every
//! result matching a (size, algorithm) cell, optionally filtered to a
//! single scenario. Under a logarithmic scale, non-positive means are
//! floored at a small plottable value; the substitution affects only the
//! derived series, never the stored results.

use crate::report::BenchmarkResult;
use serde::{Deserialize, Serialize};
use sortbench_core::{Algorithm, Scenario, SortMetrics};
use std::collections::HashMap;

/// Metric selected for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Wall-clock time in milliseconds.
    TimeMs,
    /// Comparison count.
    Comparisons,
    /// Swap/move count (per-algorithm unit).
    Swaps,
}

impl Metric {
    /// Human-readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::TimeMs => "Time (ms)",
            Metric::Comparisons => "Comparisons",
            Metric::Swaps => "Swaps / Moves",
        }
    }

    /// Extract this metric's value from a measurement record.
    pub fn value_of(&self, metrics: &SortMetrics) -> f64 {
        match self {
            Metric::TimeMs => metrics.time_ms,
            Metric::Comparisons => metrics.comparisons as f64,
            Metric::Swaps => metrics.swaps as f64,
        }
    }

    /// Floor substituted for non-positive means on a logarithmic axis.
    pub fn log_floor(&self) -> f64 {
        match self {
            Metric::TimeMs => 0.0001,
            Metric::Comparisons | Metric::Swaps => 0.1,
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "time-ms" | "timems" | "time" => Ok(Metric::TimeMs),
            "comparisons" => Ok(Metric::Comparisons),
            "swaps" => Ok(Metric::Swaps),
            other => Err(format!("Unknown metric: {}", other)),
        }
    }
}

/// Scenario restriction applied before averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioFilter {
    /// Average across every scenario present.
    All,
    /// Only results from one scenario.
    Only(Scenario),
}

impl ScenarioFilter {
    fn matches(&self, scenario: Scenario) -> bool {
        match self {
            ScenarioFilter::All => true,
            ScenarioFilter::Only(s) => *s == scenario,
        }
    }
}

impl std::str::FromStr for ScenarioFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(ScenarioFilter::All)
        } else {
            s.parse::<Scenario>().map(ScenarioFilter::Only)
        }
    }
}

/// Aggregated series for one metric: `values[algorithm_idx][size_idx]`,
/// `None` where an algorithm has no result at a size. Derived on every
/// call; nothing here persists between aggregations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Metric the values were taken from.
    pub metric: Metric,
    /// Whether log-scale flooring was applied.
    pub log_scale: bool,
    /// X-axis sizes in ascending order.
    pub sizes: Vec<usize>,
    /// Series names, in order of first appearance in the filtered results.
    pub algorithms: Vec<Algorithm>,
    /// Scenario-averaged values, rounded to 4 decimal places.
    pub values: Vec<Vec<Option<f64>>>,
}

impl MetricSeries {
    /// Look up the aggregated value for one (algorithm, size) cell.
    pub fn value(&self, algorithm: Algorithm, size: usize) -> Option<f64> {
        let ai = self.algorithms.iter().position(|&a| a == algorithm)?;
        let si = self.sizes.iter().position(|&s| s == size)?;
        self.values[ai][si]
    }
}

/// Aggregate a result list into a plottable series.
pub fn build_series(
    results: &[BenchmarkResult],
    metric: Metric,
    filter: ScenarioFilter,
    log_scale: bool,
) -> MetricSeries {
    let filtered: Vec<&BenchmarkResult> = results
        .iter()
        .filter(|r| filter.matches(r.scenario))
        .collect();

    let mut sums: HashMap<(usize, Algorithm), (f64, u64)> = HashMap::new();
    for r in &filtered {
        let cell = sums.entry((r.size, r.algorithm)).or_insert((0.0, 0));
        cell.0 += metric.value_of(&r.metrics);
        cell.1 += 1;
    }

    let mut sizes: Vec<usize> = Vec::new();
    let mut algorithms: Vec<Algorithm> = Vec::new();
    for r in &filtered {
        if !sizes.contains(&r.size) {
            sizes.push(r.size);
        }
        if !algorithms.contains(&r.algorithm) {
            algorithms.push(r.algorithm);
        }
    }
    sizes.sort_unstable();

    let values = algorithms
        .iter()
        .map(|&algorithm| {
            sizes
                .iter()
                .map(|&size| {
                    sums.get(&(size, algorithm)).map(|&(sum, count)| {
                        let mut mean = sum / count as f64;
                        if log_scale && mean <= 0.0 {
                            mean = metric.log_floor();
                        }
                        round4(mean)
                    })
                })
                .collect()
        })
        .collect();

    MetricSeries {
        metric,
        log_scale,
        sizes,
        algorithms,
        values,
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{Algorithm, Scenario, SortMetrics};

/// Outcome of a single executed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Sort ran to completion.
    Passed,
    /// Sort was contained at its recursion cap; metrics are partial.
    Partial,
}

/// One measured algorithm/size/scenario combination. Immutable once
/// produced; a new experiment run replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Unique identifier for this result (UUID v4).
    pub id: String,
    /// Algorithm that was measured.
    pub algorithm: Algorithm,
    /// Input size.
    pub size: usize,
    /// Input shape.
    pub scenario: Scenario,
    /// Collected counters and timing.
    pub metrics: SortMetrics,
    /// Completion status.
    pub status: RunStatus,
    /// Diagnostic note for a `Partial` run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Metadata captured alongside an experiment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report schema version.
    pub schema_version: u32,
    /// Engine version that produced the report.
    pub version: String,
    /// When the run finished.
    pub timestamp: DateTime<Utc>,
    /// Seed used for `Random` datasets, when fixed.
    pub seed: Option<u64>,
    /// Inter-task pause in milliseconds (0 = headless batch mode).
    pub pause_ms: u64,
}

/// Completion summary for an experiment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Tasks executed.
    pub executed: usize,
    /// Tasks dropped by the safety filter before execution.
    pub skipped: usize,
    /// Executed tasks whose sort was contained at the recursion cap.
    pub partial: usize,
    /// Total wall time of the run in milliseconds.
    pub total_duration_ms: f64,
}

/// Complete record of one experiment run, in execution order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// Results in enumeration order: size, then scenario, then algorithm.
    pub results: Vec<BenchmarkResult>,
    /// Completion summary.
    pub summary: ReportSummary,
}

/// Current report schema version.
pub const SCHEMA_VERSION: u32 = 1;

impl Report {
    /// Assemble a report from an executed run.
    pub fn new(
        results: Vec<BenchmarkResult>,
        skipped: usize,
        seed: Option<u64>,
        pause_ms: u64,
        total_duration_ms: f64,
    ) -> Self {
        let partial = results
            .iter()
            .filter(|r| r.status == RunStatus::Partial)
            .count();
        Self {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: Utc::now(),
                seed,
                pause_ms,
            },
            summary: ReportSummary {
                executed: results.len(),
                skipped,
                partial,
                total_duration_ms,
            },
            results,
        }
    }
}

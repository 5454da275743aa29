#![warn(missing_docs)]
//! SortBench Report - Result Records and Aggregation
//!
//! Owns the serializable shapes the benchmark engine hands to downstream
//! collaborators:
//! - `BenchmarkResult` / `Report` - the ordered record of one experiment run
//!   (JSON form is what a narrative-analysis collaborator consumes)
//! - `MetricSeries` - size-ordered, scenario-averaged series ready for a
//!   chart or table
//!
//! Aggregation is stateless: every series is derived fresh from the full
//! result list and never written back to it.

mod json;
mod report;
mod series;

pub use json::generate_json_report;
pub use report::{BenchmarkResult, Report, ReportMeta, ReportSummary, RunStatus, SCHEMA_VERSION};
pub use series::{Metric, MetricSeries, ScenarioFilter, build_series};

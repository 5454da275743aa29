//! Output Formatting
//!
//! Human-readable terminal rendering of a finished run:
//! - per-size result lines with status icons (✓/⚠)
//! - the aggregated series for the selected metric as a plain-text table
//! - the completion summary

use sortbench_report::{MetricSeries, Report, RunStatus};

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SortBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let mut current_size: Option<usize> = None;
    for result in &report.results {
        if current_size != Some(result.size) {
            if current_size.is_some() {
                output.push('\n');
            }
            output.push_str(&format!("Size: {}\n", result.size));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            current_size = Some(result.size);
        }

        let status_icon = match result.status {
            RunStatus::Passed => "✓",
            RunStatus::Partial => "⚠",
        };
        output.push_str(&format!(
            "  {} {:<10} {:<8} {:>12.4} ms  {:>12} cmp  {:>12} swp\n",
            status_icon,
            result.algorithm.id(),
            result.scenario.id(),
            result.metrics.time_ms,
            result.metrics.comparisons,
            result.metrics.swaps
        ));
        if let Some(message) = &result.error_message {
            output.push_str(&format!("      note: {}\n", message));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Completed {} task(s) in {:.1} ms ({} skipped by safety filter, {} partial)\n",
        report.summary.executed,
        report.summary.total_duration_ms,
        report.summary.skipped,
        report.summary.partial
    ));

    output
}

/// Format an aggregated series as a plain-text table, sizes down the rows
/// and algorithms across the columns.
pub fn format_series(series: &MetricSeries) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!(
        "{} by input size{}\n",
        series.metric.label(),
        if series.log_scale {
            " (log-scale floor applied)"
        } else {
            ""
        }
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    output.push_str(&format!("{:>10}", "size"));
    for algorithm in &series.algorithms {
        output.push_str(&format!("  {:>14}", algorithm.id()));
    }
    output.push('\n');

    for (si, &size) in series.sizes.iter().enumerate() {
        output.push_str(&format!("{:>10}", size));
        for (ai, _) in series.algorithms.iter().enumerate() {
            match series.values[ai][si] {
                Some(v) => output.push_str(&format!("  {:>14.4}", v)),
                None => output.push_str(&format!("  {:>14}", "-")),
            }
        }
        output.push('\n');
    }

    output
}

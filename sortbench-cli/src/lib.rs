#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Wires the benchmark engine into a terminal tool: selection parsing,
//! task planning with the safety filter, sequential execution with a
//! progress bar, and human/JSON output. Use `sortbench_cli::run()` from a
//! binary's `main()` to get the full CLI experience.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sortbench_cli::run()
//! }
//! ```

mod executor;
mod formatting;
mod planner;

pub use executor::{DEFAULT_PAUSE, ExecutionConfig, ExecutionError, Executor, TaskProgress};
pub use formatting::{format_human_output, format_series};
pub use planner::{
    BenchmarkTask, DANGER_SIZE_THRESHOLD, ExecutionPlan, PlanError, Selection, build_plan,
    is_dangerous_combination,
};

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use sortbench_core::{Algorithm, Scenario};
use sortbench_report::{Metric, Report, ScenarioFilter, build_series, generate_json_report};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Human,
    /// Machine-readable JSON report.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// SortBench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - instrumented sorting algorithm benchmarks")]
pub struct Cli {
    /// Algorithms to benchmark: bubble, selection, insertion, quick, merge
    #[arg(long, value_delimiter = ',', default_value = "bubble,quick,merge")]
    pub algorithms: Vec<Algorithm>,

    /// Input sizes to benchmark
    #[arg(long, value_delimiter = ',', default_value = "100,1000")]
    pub sizes: Vec<usize>,

    /// Input shapes: random, sorted, reverse
    #[arg(long, value_delimiter = ',', default_value = "random")]
    pub scenarios: Vec<Scenario>,

    /// Metric shown in the aggregated series: time-ms, comparisons, swaps
    #[arg(long, default_value = "time-ms")]
    pub metric: Metric,

    /// Scenario restriction for the aggregated series: all, or one scenario
    #[arg(long, default_value = "all")]
    pub scenario_filter: ScenarioFilter,

    /// Floor non-positive series means so they stay plottable on a log axis
    #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
    pub log_scale: bool,

    /// Fixed seed for random dataset generation (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between tasks in milliseconds; 0 disables (headless batch)
    #[arg(long, default_value = "50")]
    pub pause_ms: u64,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List the planned tasks without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse CLI arguments and run the benchmark suite.
pub fn run() -> anyhow::Result<()> {
    run_with(Cli::parse())
}

/// Run the benchmark suite with already-parsed arguments.
pub fn run_with(cli: Cli) -> anyhow::Result<()> {
    let selection = Selection::new(
        cli.algorithms.clone(),
        cli.sizes.clone(),
        cli.scenarios.clone(),
    );
    let plan = build_plan(&selection);

    if cli.verbose && plan.skipped > 0 {
        eprintln!(
            "Safety filter skipped {} combination(s) (quadratic algorithms at sizes >= {})",
            plan.skipped, DANGER_SIZE_THRESHOLD
        );
    }

    if cli.dry_run {
        for task in &plan.tasks {
            println!(
                "{:<10} size={:<8} scenario={}",
                task.algorithm.id(),
                task.size,
                task.scenario.id()
            );
        }
        println!("{} task(s) planned, {} skipped", plan.tasks.len(), plan.skipped);
        return Ok(());
    }

    let config = ExecutionConfig {
        pause: Duration::from_millis(cli.pause_ms),
        seed: cli.seed,
    };

    let pb = ProgressBar::new(plan.tasks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let started = Instant::now();
    let results = Executor::new(config)
        .execute(&plan, |progress| {
            pb.set_position(progress.index as u64);
            pb.set_message(format!(
                "{} n={} ({})",
                progress.task.algorithm.id(),
                progress.task.size,
                progress.task.scenario.id()
            ));
        })
        .context("benchmark run aborted")?;
    let total_duration_ms = started.elapsed().as_secs_f64() * 1_000.0;
    pb.finish_with_message(format!("Completed {} task(s)", results.len()));

    if cli.verbose {
        for result in results.iter().filter(|r| r.error_message.is_some()) {
            eprintln!(
                "{} n={} ({}): {}",
                result.algorithm.id(),
                result.size,
                result.scenario.id(),
                result.error_message.as_deref().unwrap_or_default()
            );
        }
    }

    let report = Report::new(
        results,
        plan.skipped,
        cli.seed,
        cli.pause_ms,
        total_duration_ms,
    );

    let rendered = match cli.format {
        OutputFormat::Json => {
            generate_json_report(&report).context("failed to serialize report")?
        }
        OutputFormat::Human => {
            let series = build_series(
                &report.results,
                cli.metric,
                cli.scenario_filter,
                cli.log_scale,
            );
            let mut text = format_human_output(&report);
            text.push_str(&format_series(&series));
            text
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Command-line front end for the sorting benchmark: argument parsing,
//! `sortbench.toml` discovery, planning, execution and report output.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = sortbench_cli::run() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{
    ExecutionConfig, Executor, TrialSet, build_report, compute_statistics, format_algorithm_list,
    format_human_output,
};
pub use planner::{ExecutionPlan, build_plan};

use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use sortbench_core::{Algorithm, Harness};
use sortbench_report::{OutputFormat, format_duration, generate_csv_report, generate_json_report};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - instrumented sorting algorithm benchmark")]
pub struct Cli {
    /// Optional subcommand; defaults to Sweep over the configured sizes
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only run algorithms whose id matches this regex
    #[arg(long, global = true)]
    pub filter: Option<String>,

    /// Output format: human, json, csv
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Dataset generator seed
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// Exclusive upper bound on generated values
    #[arg(long, global = true)]
    pub upper_bound: Option<u32>,

    /// Largest dataset size accepted
    #[arg(long, global = true)]
    pub max_size: Option<usize>,

    /// Trials per algorithm and size
    #[arg(long, short = 'n', global = true)]
    pub repeat: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not draw a progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the algorithms in registry order
    List,
    /// Run a single algorithm on one dataset
    Run {
        /// Algorithm id, alias or registry number (1-8)
        #[arg(name = "ALGORITHM")]
        algorithm: String,
        /// Dataset size
        #[arg(long, short, default_value = "1000", allow_negative_numbers = true)]
        size: i64,
    },
    /// Run every algorithm on each dataset size (default)
    Sweep {
        /// Dataset sizes; defaults to the configured batch
        #[arg(name = "SIZES", allow_negative_numbers = true)]
        sizes: Vec<i64>,
        /// Extra size appended to the batch when not already present
        #[arg(long, short, allow_negative_numbers = true)]
        size: Option<i64>,
    },
    /// Print a default sortbench.toml
    Init,
}

/// Run the SortBench CLI with arguments from the environment.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if arguments are invalid, a run
/// could not be performed, or any algorithm produced unsorted output.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = SortBenchConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => {
            print!("{}", format_algorithm_list());
            Ok(())
        }
        Some(Commands::Init) => {
            print!("{}", SortBenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run {
            ref algorithm,
            size,
        }) => {
            let algorithm: Algorithm = algorithm.parse()?;
            run_benchmarks(&cli, &config, Some(algorithm), vec![size])
        }
        Some(Commands::Sweep { ref sizes, size }) => {
            let mut batch = if sizes.is_empty() {
                config.sweep.sizes.clone()
            } else {
                sizes.clone()
            };
            batch.extend(size);
            run_benchmarks(&cli, &config, None, batch)
        }
        None => run_benchmarks(&cli, &config, None, config.sweep.sizes.clone()),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the harness by layering: sortbench.toml defaults → CLI overrides.
fn build_harness(cli: &Cli, config: &SortBenchConfig) -> anyhow::Result<Harness> {
    let mut dataset = config.dataset.clone();
    if let Some(seed) = cli.seed {
        dataset.seed = seed;
    }
    if let Some(upper_bound) = cli.upper_bound {
        dataset.upper_bound = upper_bound;
    }
    if let Some(max_size) = cli.max_size {
        dataset.max_size = max_size;
    }
    if dataset.max_size > sortbench_core::MAX_DATASET_SIZE {
        tracing::warn!(
            max_size = dataset.max_size,
            "max_size exceeds the default limit; quadratic algorithms will be slow"
        );
    }

    let generator = dataset.generator()?;
    Ok(Harness::new(generator, dataset.max_size))
}

/// Explain why a plan runs nothing, or `None` when it has work
fn empty_plan_reason(plan: &ExecutionPlan) -> Option<&'static str> {
    if plan.algorithms.is_empty() {
        Some("No algorithms match the filter.")
    } else if plan.sizes.is_empty() {
        Some("No dataset sizes to run.")
    } else {
        None
    }
}

fn run_benchmarks(
    cli: &Cli,
    config: &SortBenchConfig,
    only: Option<Algorithm>,
    sizes: Vec<i64>,
) -> anyhow::Result<()> {
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let filter_re = cli
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --filter pattern")?;

    let plan = build_plan(only, filter_re.as_ref(), sizes);
    if let Some(reason) = empty_plan_reason(&plan) {
        eprintln!("{reason}");
        return Ok(());
    }

    let repeat = cli.repeat.unwrap_or(config.sweep.repeat).max(1);
    let harness = build_harness(cli, config)?;
    let exec_config = ExecutionConfig {
        repeat,
        show_progress: config.output.progress && !cli.no_progress,
    };

    tracing::info!(
        algorithms = plan.algorithms.len(),
        sizes = ?plan.sizes,
        repeat,
        "starting benchmark"
    );

    let start_time = Instant::now();
    let executor = Executor::new(harness, exec_config);
    let sets = executor.execute(&plan)?;

    let stats = compute_statistics(&sets);

    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let report = build_report(&sets, &stats, executor.harness(), repeat, total_duration_ms);

    tracing::info!(
        runs = report.summary.total_runs,
        elapsed = %format_duration(total_duration_ms),
        "benchmark finished"
    );

    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    if report.has_failures() {
        anyhow::bail!(
            "{} run(s) produced unsorted output",
            report.summary.incorrect
        );
    }

    Ok(())
}

//! Lapse - Main Entry Point
//!
//! Command-line driver for the benchmark harness: registers the built-in
//! numeric workloads, runs them, and prints the comparative report.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::process;

use lapse::common::constants::{DEFAULT_FIB_INDEX, DEFAULT_PI_TERMS, DEFAULT_REPETITIONS};
use lapse::harness::format_nanos;
use lapse::{builtin_harness, BenchmarkReport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputMode {
    /// ASCII table (default)
    Table,
    /// Values delimited by "|", no header
    List,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "lapse")]
#[command(about = "Lapse - Sequential Numeric Micro-Benchmark Harness")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Number of timed repetitions per task
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Number of Leibniz series terms for the pi task
    #[arg(long, default_value_t = DEFAULT_PI_TERMS)]
    pi_terms: i64,

    /// Fibonacci index for the fibonacci tasks
    #[arg(long, default_value_t = DEFAULT_FIB_INDEX)]
    fib_index: i64,

    /// Report output mode
    #[arg(short, long, value_enum, default_value_t = OutputMode::Table)]
    mode: OutputMode,

    /// Write the raw samples to FILE as CSV, in measurement order
    #[arg(long, value_name = "FILE")]
    raw_export: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_report(report: &BenchmarkReport, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => {
            print!("{}", report.to_table_string());
        }
        OutputMode::List => {
            for row in &report.rows {
                if row.failed {
                    println!(
                        "{}|{}|failed|{}",
                        row.label,
                        row.input,
                        row.error.as_deref().unwrap_or("unknown error")
                    );
                } else {
                    println!(
                        "{}|{}|{}|{}|{}|{}|{}",
                        row.label,
                        row.input,
                        row.n_samples,
                        format_nanos(row.min_ns),
                        format_nanos(row.median_ns),
                        format_nanos(row.mean_ns),
                        format_nanos(row.max_ns)
                    );
                }
            }
        }
        OutputMode::Csv => {
            println!("label,input,n_samples,min_ns,median_ns,mean_ns,max_ns,all_results_equal,failed");
            for row in &report.rows {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    row.label,
                    row.input,
                    row.n_samples,
                    row.min_ns,
                    row.median_ns,
                    row.mean_ns,
                    row.max_ns,
                    row.all_results_equal
                        .map(|b| b.to_string())
                        .unwrap_or_default(),
                    row.failed
                );
            }
        }
        OutputMode::Json => {
            println!("{}", report.to_json_string()?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
        println!("Lapse v{}", env!("CARGO_PKG_VERSION"));
    }

    let mut harness = match builtin_harness(cli.pi_terms, cli.fib_index) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = harness.run(cli.repetitions) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let report = harness.report();
    print_report(&report, cli.mode)?;

    if let Some(path) = cli.raw_export {
        let file = File::create(&path)?;
        harness.export_samples_csv(file)?;
        if cli.verbose {
            println!("Raw samples written to {}", path);
        }
    }

    Ok(())
}

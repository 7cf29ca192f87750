//! `coverage` CLI — build contract coverage intervals and hourly usage
//! summaries from JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Intervals for a report window (JSON array of [begin, end] pairs on stdout)
//! coverage intervals hr-contracts.json 2022-06-15T00:00:00+02:00 2023-04-30T00:00:00+02:00
//!
//! # Also save the result to a file
//! coverage intervals hr-contracts.json 2022-06-15T00:00:00+02:00 2023-04-30T00:00:00+02:00 --out intervals.json
//!
//! # Hourly usage summary (stdin → stdout)
//! cat usage.json | coverage aggregate
//!
//! # From file to file, bucketing in another zone
//! coverage aggregate -i usage.json -o summary.json --zone Asia/Tokyo
//! ```

mod log;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use coverage_engine::zone::parse_zone;
use coverage_engine::{
    aggregate::usage_to_json, aggregate_json, build_intervals_in, intervals_to_json,
    load_periods_from_file, parse_instant, resolve_reference_zone, ReportWindow,
};
use std::io::{self, Read};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "coverage",
    version,
    about = "Contract coverage intervals and hourly usage summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference timezone (IANA name). Defaults to Europe/Warsaw, falling back to UTC
    #[arg(long, global = true)]
    zone: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a report window into intervals at every contract coverage change
    Intervals {
        /// JSON file with an array of {"BEGIN": ..., "END": ...} contracts.
        /// Strict JSON: comments and trailing commas are rejected
        contracts: String,
        /// Report window begin, e.g. 2022-06-15T00:00:00+02:00
        report_begin: String,
        /// Report window end (exclusive)
        report_end: String,
        /// Also write the JSON result to this file
        #[arg(long)]
        out: Option<String>,
    },
    /// Sum usage records into hourly buckets
    Aggregate {
        /// Input JSON file (reads from stdin if omitted or "-").
        /// Strict JSON: comments and trailing commas are rejected
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted or "-")
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log::init_logging(cli.verbose);

    let zone = match cli.zone.as_deref() {
        Some(name) => parse_zone(name).context("Failed to resolve --zone")?,
        None => resolve_reference_zone(),
    };
    debug!(zone = %zone.name(), "using reference zone");

    match cli.command {
        Commands::Intervals {
            contracts,
            report_begin,
            report_end,
            out,
        } => run_intervals(
            &contracts,
            &report_begin,
            &report_end,
            out.as_deref(),
            zone,
        ),
        Commands::Aggregate { input, output } => {
            let json = read_input(input.as_deref())?;
            let rows = aggregate_json(&json, zone).context("Failed to aggregate usage records")?;
            let pretty = usage_to_json(&rows)?;
            write_output(output.as_deref(), &pretty)
        }
    }
}

fn run_intervals(
    contracts_path: &str,
    report_begin: &str,
    report_end: &str,
    out: Option<&str>,
    zone: Tz,
) -> Result<()> {
    let begin = parse_instant(report_begin).context("Failed to parse report dates")?;
    let end = parse_instant(report_end).context("Failed to parse report dates")?;

    let periods = load_periods_from_file(contracts_path)
        .with_context(|| format!("Failed to load contracts file '{}'", contracts_path))?;
    debug!(contracts = periods.len(), "loaded contracts");

    let intervals = ReportWindow::new(begin, end)
        .and_then(|window| build_intervals_in(&window, &periods, zone))
        .context("Failed to build intervals")?;
    let json = intervals_to_json(&intervals)?;

    println!("{}", json);

    // The result is already on stdout, so a failed save is not fatal.
    if let Some(path) = out.filter(|p| !p.trim().is_empty()) {
        if let Err(e) = std::fs::write(path, &json) {
            warn!("could not write output file '{}': {}", path, e);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) if path != "-" => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        _ => {
            println!("{}", content);
        }
    }
    Ok(())
}

//! Command implementations for the provision processor CLI
//!
//! This module contains the main command execution logic: logging setup,
//! input acquisition, reference-instant capture, and output rendering.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::report_parser::{ParseOutcome, ReportParser};
use crate::app::models::StorageProvisioning;
use crate::cli::args::{Args, Commands, ConvertArgs, InspectArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};

/// Processing statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of data rows scanned from the report
    pub rows_scanned: usize,
    /// Number of records written to the output
    pub records_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Main command runner for the provision processor
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Convert(convert_args) => run_convert(convert_args),
        Commands::Inspect(inspect_args) => run_inspect(inspect_args),
    }
}

/// Execute the convert command: report in, record sequence out
fn run_convert(args: ConvertArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level());
    info!("Starting report conversion");

    args.validate()?;

    let config = Config {
        input: args.input.clone(),
        output: args.output.clone(),
        reference_time: args.reference_instant()?,
        pretty: args.pretty,
    };
    config.validate()?;

    let raw = read_report(config.input.as_deref())?;

    // The reference instant is captured exactly once per run; every window
    // of the conversion is computed against this same value.
    let reference = config.reference_time.unwrap_or_else(Utc::now);
    debug!("Reference instant: {}", reference.to_rfc3339());

    let parser = ReportParser::new(reference);
    let outcome = parser.parse(&raw)?;

    let rendered = match args.format {
        OutputFormat::Json => render_json(&outcome.records, config.pretty)?,
        OutputFormat::Human => render_human(&outcome.records),
    };
    write_output(config.output.as_deref(), &rendered)?;

    let stats = ProcessingStats {
        rows_scanned: outcome.stats.rows_scanned,
        records_written: outcome.records.len(),
        processing_time: start_time.elapsed(),
    };

    info!(
        "Wrote {} record(s) from {} row(s) in {:.3}s",
        stats.records_written,
        stats.rows_scanned,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Execute the inspect command: classification statistics and a verdict,
/// no records emitted
fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level());

    let raw = read_report(args.input.as_deref())?;
    let reference = Utc::now();
    let parser = ReportParser::new(reference);

    match parser.parse(&raw) {
        Ok(outcome) => {
            print_inspection(&outcome);
            println!("Verdict:            {}", "PASS".green().bold());

            Ok(ProcessingStats {
                rows_scanned: outcome.stats.rows_scanned,
                records_written: 0,
                processing_time: start_time.elapsed(),
            })
        }
        Err(error) => {
            println!("Verdict:            {}", "FAIL".red().bold());
            Err(error)
        }
    }
}

/// Set up structured logging with the given level.
///
/// Safe to call more than once; later calls keep the first subscriber.
fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            crate::constants::LOG_ENV_PREFIX,
            log_level
        ))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

/// Read the raw report from a file, or from stdin when no path is given
fn read_report(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            debug!("Reading report from {}", path.display());
            std::fs::read(path)
                .map_err(|e| Error::io(format!("Failed to read report {}", path.display()), e))
        }
        None => {
            debug!("Reading report from stdin");
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| Error::io("Failed to read report from stdin", e))?;
            Ok(buffer)
        }
    }
}

/// Serialize records as a JSON array
fn render_json(records: &[StorageProvisioning], pretty: bool) -> Result<String> {
    let mut rendered = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|e| Error::serialization("Failed to serialize records", e))?;

    rendered.push('\n');
    Ok(rendered)
}

/// Render records as a human-readable summary table
fn render_human(records: &[StorageProvisioning]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<17} {:<17} {:>8} {:>8} {:>10} {:>10}\n",
        "window start", "window end", "cpu db", "cpu host", "iops", "io mb/s"
    ));

    for record in records {
        out.push_str(&format!(
            "{:<17} {:<17} {:>8.1} {:>8.1} {:>10.1} {:>10.1}\n",
            format_bound(record.time_start),
            format_bound(record.time_end),
            record.cpu_db_avg,
            record.cpu_host_avg,
            record.iops_avg,
            record.iomb_avg
        ));
    }

    out.push_str(&format!("\n{} record(s)\n", records.len()));
    out
}

fn format_bound(bound: Option<DateTime<Utc>>) -> String {
    match bound {
        Some(instant) => instant.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Print the inspect command's classification summary
fn print_inspection(outcome: &ParseOutcome) {
    let stats = &outcome.stats;

    println!("Rows scanned:       {}", stats.rows_scanned);
    println!("Summary records:    {}", stats.summary_records);
    println!("Time-series records: {}", stats.time_series_records);
    println!("Unavailable rows:   {}", stats.rows_unavailable);
    println!("Dropped rows:       {}", stats.rows_dropped);
}

/// Write the rendered output to a file, or to stdout when no path is given
fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| Error::io(format!("Failed to write output {}", path.display()), e))?;
            info!("Output written to {}", path.display());
            Ok(())
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

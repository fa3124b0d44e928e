//! Command-line argument definitions for the provision processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the storage-provisioning report processor
///
/// Converts the fixed-format output of the storage-provisioning collection
/// script into structured metric records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "provision-processor",
    version,
    about = "Convert storage-provisioning report output into structured metric records",
    long_about = "Converts the line-oriented, '|||'-delimited output of the storage-provisioning \
                  collection script into a sequence of metric records, mapping the leading twelve \
                  rows onto the fixed observation-window schedule and parsing trailing rows as \
                  timestamped time-series points. Any field that fails numeric conversion rejects \
                  the whole report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the provision processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a captured report into metric records (main command)
    Convert(ConvertArgs),
    /// Inspect a captured report without emitting records
    Inspect(InspectArgs),
}

/// Arguments for the convert command (main conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input report file
    ///
    /// Reads the report from standard input when not specified.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input report file (stdin when omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Output file for converted records
    ///
    /// Writes to standard output when not specified.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for converted records (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Reference instant for window computation, RFC 3339
    ///
    /// All relative windows are computed against this single instant. When
    /// not specified, the current time is captured once at startup. Useful
    /// for reproducible output from archived reports.
    #[arg(
        long = "reference-time",
        value_name = "TIMESTAMP",
        help = "Reference instant for window computation (RFC 3339, defaults to now)"
    )]
    pub reference_time: Option<String>,

    /// Output format for converted records
    #[arg(
        long = "format",
        value_enum,
        default_value = "json",
        help = "Output format for converted records"
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty", help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (pre-flight report check)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input report file
    ///
    /// Reads the report from standard input when not specified.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input report file (stdin when omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for converted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON record sequence
    Json,
    /// Human-readable summary table
    Human,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(reference_time) = &self.reference_time {
            self.parse_reference_time(reference_time)?;
        }

        Ok(())
    }

    /// Parse the reference instant override
    pub fn parse_reference_time(&self, value: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                Error::configuration(format!(
                    "Invalid reference time '{}': {} (expected RFC 3339, e.g. 2023-10-23T15:30:00Z)",
                    value, e
                ))
            })
    }

    /// Resolve the reference instant override, if any
    pub fn reference_instant(&self) -> Result<Option<DateTime<Utc>>> {
        self.reference_time
            .as_deref()
            .map(|value| self.parse_reference_time(value))
            .transpose()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

impl InspectArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn convert_args() -> ConvertArgs {
        ConvertArgs {
            input: None,
            output: None,
            reference_time: None,
            format: OutputFormat::Json,
            pretty: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_reference_time_parsing() {
        let mut args = convert_args();
        args.reference_time = Some("2023-10-23T15:30:00Z".to_string());

        let parsed = args.reference_instant().unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 10, 23, 15, 30, 0).unwrap());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_reference_time_with_offset() {
        let mut args = convert_args();
        args.reference_time = Some("2023-10-23T15:30:00+02:00".to_string());

        let parsed = args.reference_instant().unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 10, 23, 13, 30, 0).unwrap());
    }

    #[test]
    fn test_invalid_reference_time_is_rejected() {
        let mut args = convert_args();
        args.reference_time = Some("yesterday".to_string());

        assert!(args.validate().is_err());
        assert!(args.reference_instant().is_err());
    }

    #[test]
    fn test_absent_reference_time() {
        let args = convert_args();

        assert!(args.validate().is_ok());
        assert_eq!(args.reference_instant().unwrap(), None);
    }

    #[test]
    fn test_log_level() {
        let mut args = convert_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_command_parsing() {
        let args = Args::parse_from(["provision-processor", "convert", "-i", "report.txt"]);
        match args.get_command() {
            Commands::Convert(convert) => {
                assert_eq!(convert.input, Some(PathBuf::from("report.txt")));
                assert_eq!(convert.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::parse_from(["provision-processor", "inspect"]);
        assert!(matches!(args.get_command(), Commands::Inspect(_)));
    }
}

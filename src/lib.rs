//! Provision Processor Library
//!
//! A Rust library for converting fixed-format database storage-provisioning
//! reports into structured metric records.
//!
//! The input is the textual output of an administrative collection script:
//! line-oriented, `|||`-delimited fields between `BEGINOUTPUT`/`ENDOUTPUT`
//! sentinel lines. This library provides tools for:
//! - Scanning report lines with proper sentinel and `N/A` row handling
//! - Mapping row position onto the fixed 12-slot observation-window schedule
//! - Parsing summary and time-series rows into metric records
//! - Aggregating every field-level parse failure into a single error value
//! - Serializing the resulting record sequence for downstream consumers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::StorageProvisioning;
pub use app::services::report_parser::{ParseOutcome, ParseStats, ReportParser};
pub use config::Config;

/// Result type alias for the provision processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A numeric field failed conversion
    #[error("Invalid value for {field} at row {row}: '{value}' ({message})")]
    FieldParse {
        row: usize,
        field: &'static str,
        value: String,
        message: String,
    },

    /// A field expected by the row shape was not present
    #[error("Missing {field} at row {row}")]
    MissingField { row: usize, field: &'static str },

    /// The compact timestamp of a time-series row failed to parse
    #[error("Invalid timestamp at row {row}: '{value}'")]
    TimestampParse {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// One or more rows failed to parse; the whole conversion is rejected
    #[error("report conversion failed with {} parse failure(s)", .failures.len())]
    ReportParse { failures: Vec<Error> },

    /// Record serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a field parse error with row and field context
    pub fn field_parse(
        row: usize,
        field: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::FieldParse {
            row,
            field,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(row: usize, field: &'static str) -> Self {
        Self::MissingField { row, field }
    }

    /// Create a timestamp parse error
    pub fn timestamp_parse(
        row: usize,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::TimestampParse {
            row,
            value: value.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Enumerate the underlying failures of an aggregated conversion error.
    ///
    /// Returns an empty slice for every other variant.
    pub fn failures(&self) -> &[Error] {
        match self {
            Self::ReportParse { failures } => failures,
            _ => &[],
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Record serialization failed".to_string(),
            source: error,
        }
    }
}

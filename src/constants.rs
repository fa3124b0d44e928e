//! Application constants for the provision processor
//!
//! This module contains the report format literals, row shape definitions,
//! and default values used throughout the application.

// =============================================================================
// Report Format Literals
// =============================================================================

/// Sentinel line emitted by the collection script before the data region
pub const OUTPUT_BEGIN_MARKER: &str = "BEGINOUTPUT";

/// Sentinel line emitted by the collection script after the data region
pub const OUTPUT_END_MARKER: &str = "ENDOUTPUT";

/// Delimiter between fields within a data line
pub const FIELD_DELIMITER: &str = "|||";

/// Marker the collection script emits for values it could not sample.
///
/// A row containing this literal in any field produces no record but still
/// consumes a slot in the window schedule.
pub const UNAVAILABLE_MARKER: &str = "N/A";

// =============================================================================
// Row Shapes
// =============================================================================

/// Field count of a summary row (eight numeric metrics, no timestamp)
pub const SUMMARY_FIELD_COUNT: usize = 8;

/// Field count of a time-series row (compact timestamp plus eight metrics)
pub const TIME_SERIES_FIELD_COUNT: usize = 9;

/// Number of fixed observation-window slots at the head of every report
pub const SUMMARY_SLOT_COUNT: usize = 12;

/// Compact timestamp layout of time-series rows: zero-padded day and month,
/// then hour:minute, no separator and no year (e.g. `231015:30`).
///
/// The calendar year of the reference instant is substituted at parse time.
pub const COMPACT_TIMESTAMP_FORMAT: &str = "%d%m%H:%M";

// =============================================================================
// Logical Field Names
// =============================================================================

/// Metric field names in the order they appear on a summary row.
///
/// Time-series rows carry the same metrics shifted one position right,
/// after the leading timestamp field.
pub const METRIC_FIELD_NAMES: [&str; SUMMARY_FIELD_COUNT] = [
    "cpu_db_avg",
    "cpu_db_max",
    "cpu_host_avg",
    "cpu_host_max",
    "iops_avg",
    "iops_max",
    "iomb_avg",
    "iomb_max",
];

/// Name of the leading timestamp field on a time-series row
pub const TIMESTAMP_FIELD_NAME: &str = "time_start";

// =============================================================================
// CLI Defaults
// =============================================================================

/// Environment filter applied when RUST_LOG is not set
pub const LOG_ENV_PREFIX: &str = "provision_processor";

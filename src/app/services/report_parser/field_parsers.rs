//! Field parsing primitives for report rows
//!
//! Numeric and timestamp conversion helpers that trim their input and fail
//! with an error attributing the offending logical field.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::constants::COMPACT_TIMESTAMP_FORMAT;
use crate::{Error, Result};

/// Parse a numeric metric field, trimming surrounding whitespace first.
///
/// A failure identifies the logical field and the offending value; the
/// caller decides whether sibling fields are still attempted.
pub fn parse_metric_field(row: usize, field: &'static str, value: &str) -> Result<f64> {
    let trimmed = value.trim();

    trimmed
        .parse::<f64>()
        .map_err(|e| Error::field_parse(row, field, trimmed, e.to_string()))
}

/// Parse the compact timestamp of a time-series row.
///
/// The layout carries no year, so the given calendar year is substituted
/// before parsing. The result is interpreted as UTC.
pub fn parse_compact_timestamp(row: usize, value: &str, year: i32) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    let dated = format!("{year} {trimmed}");
    let layout = format!("%Y {COMPACT_TIMESTAMP_FORMAT}");

    NaiveDateTime::parse_from_str(&dated, &layout)
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::timestamp_parse(row, trimmed, e))
}

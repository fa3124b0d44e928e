//! Row-to-record conversion for both report row shapes
//!
//! Summary rows carry eight metrics and receive their window from the slot
//! schedule; time-series rows lead with a compact timestamp and never carry
//! an end bound. Every field conversion is attempted regardless of earlier
//! failures on the same row, so one bad field still leaves the rest parsed.

use chrono::{DateTime, Utc};

use super::failures::ParseFailures;
use super::field_parsers::{parse_compact_timestamp, parse_metric_field};
use crate::Error;
use crate::app::models::StorageProvisioning;
use crate::constants::{METRIC_FIELD_NAMES, TIMESTAMP_FIELD_NAME};

/// Parse a summary row into a record carrying the given window bounds.
///
/// Failed fields keep their zero default; the partially populated record is
/// still returned so output order mirrors input order.
pub fn parse_summary_row(
    row: usize,
    fields: &[&str],
    window: (Option<DateTime<Utc>>, Option<DateTime<Utc>>),
    failures: &mut ParseFailures,
) -> StorageProvisioning {
    let (time_start, time_end) = window;

    let mut record = StorageProvisioning {
        time_start,
        time_end,
        ..Default::default()
    };

    populate_metrics(row, fields, 0, &mut record, failures);
    record
}

/// Parse a time-series row: a leading compact timestamp, then the same
/// eight metrics shifted one position right. The end bound stays unset.
pub fn parse_time_series_row(
    row: usize,
    fields: &[&str],
    year: i32,
    failures: &mut ParseFailures,
) -> StorageProvisioning {
    let mut record = StorageProvisioning::default();

    match fields.first() {
        Some(value) => match parse_compact_timestamp(row, value, year) {
            Ok(start) => record.time_start = Some(start),
            Err(failure) => failures.push(failure),
        },
        None => failures.push(Error::missing_field(row, TIMESTAMP_FIELD_NAME)),
    }

    populate_metrics(row, fields, 1, &mut record, failures);
    record
}

/// Attempt every metric conversion independently, reading fields from the
/// given offset within the row
fn populate_metrics(
    row: usize,
    fields: &[&str],
    offset: usize,
    record: &mut StorageProvisioning,
    failures: &mut ParseFailures,
) {
    record.cpu_db_avg = metric_at(row, fields, offset, 0, failures);
    record.cpu_db_max = metric_at(row, fields, offset, 1, failures);
    record.cpu_host_avg = metric_at(row, fields, offset, 2, failures);
    record.cpu_host_max = metric_at(row, fields, offset, 3, failures);
    record.iops_avg = metric_at(row, fields, offset, 4, failures);
    record.iops_max = metric_at(row, fields, offset, 5, failures);
    record.iomb_avg = metric_at(row, fields, offset, 6, failures);
    record.iomb_max = metric_at(row, fields, offset, 7, failures);
}

/// Convert the metric at the given position, recording a failure for a
/// value that does not parse or a position the row does not have
fn metric_at(
    row: usize,
    fields: &[&str],
    offset: usize,
    position: usize,
    failures: &mut ParseFailures,
) -> f64 {
    let field = METRIC_FIELD_NAMES[position];

    match fields.get(offset + position) {
        Some(value) => failures.capture(parse_metric_field(row, field, value)),
        None => {
            failures.push(Error::missing_field(row, field));
            0.0
        }
    }
}

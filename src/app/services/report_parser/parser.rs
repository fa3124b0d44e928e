//! Core report parser implementation
//!
//! This module owns row classification and dispatch: a running slot counter
//! decides whether a row is a scheduled summary row or a trailing
//! time-series row, and the per-row converters fill in the metric fields.

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, info};

use super::failures::ParseFailures;
use super::record_parser::{parse_summary_row, parse_time_series_row};
use super::scanner::{ReportScanner, row_is_unavailable};
use super::stats::{ParseOutcome, ParseStats};
use super::windows::window_for_slot;
use crate::Result;
use crate::app::models::StorageProvisioning;
use crate::constants::{SUMMARY_FIELD_COUNT, SUMMARY_SLOT_COUNT};

/// Parser for storage-provisioning report output
///
/// Holds the reference instant every relative window is computed against.
/// The instant is injected once by the caller and never re-read during a
/// conversion, so all windows of one run share the same origin no matter
/// how long the pass takes. The parser itself is immutable; concurrent
/// conversions through a shared parser are safe.
#[derive(Debug, Clone, Copy)]
pub struct ReportParser {
    reference: DateTime<Utc>,
}

impl ReportParser {
    /// Create a parser resolving windows against the given reference instant
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    /// The reference instant this parser resolves windows against
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Convert raw report bytes into the ordered record sequence.
    ///
    /// Any field or timestamp failure anywhere in the batch rejects the
    /// whole conversion: the aggregated error enumerates every failure and
    /// no records are returned. Invalid UTF-8 is decoded lossily, so
    /// malformed bytes surface as ordinary field failures.
    pub fn parse(&self, raw: &[u8]) -> Result<ParseOutcome> {
        let text = String::from_utf8_lossy(raw);
        debug!("Converting report of {} bytes", raw.len());

        let mut records = Vec::new();
        let mut stats = ParseStats::new();
        let mut failures = ParseFailures::new();
        let year = self.reference.year();

        // Slot index: one per row reaching the classifier, skipped and
        // dropped rows included
        let mut slot = 0usize;

        for fields in ReportScanner::new(&text) {
            stats.rows_scanned += 1;

            if row_is_unavailable(&fields) {
                debug!("Row {} unavailable, slot consumed without a record", slot);
                stats.rows_unavailable += 1;
                slot += 1;
                continue;
            }

            if fields.len() == SUMMARY_FIELD_COUNT {
                let window = window_for_slot(slot, self.reference);
                records.push(parse_summary_row(slot, &fields, window, &mut failures));
                stats.summary_records += 1;
            } else if slot >= SUMMARY_SLOT_COUNT {
                records.push(parse_time_series_row(slot, &fields, year, &mut failures));
                stats.time_series_records += 1;
            } else {
                // Malformed shape before the schedule is exhausted: no
                // record, no error, slot still consumed
                debug!("Row {} with {} field(s) dropped", slot, fields.len());
                stats.rows_dropped += 1;
            }

            slot += 1;
        }

        info!(
            "Converted {} record(s) from {} row(s) with {} failure(s)",
            records.len(),
            stats.rows_scanned,
            failures.len()
        );

        failures.into_result(ParseOutcome { records, stats })
    }

    /// Convert raw report bytes, returning only the record sequence
    pub fn parse_records(&self, raw: &[u8]) -> Result<Vec<StorageProvisioning>> {
        self.parse(raw).map(|outcome| outcome.records)
    }
}

//! Parsing statistics and result structures for report conversion
//!
//! Statistics are observability only; they never relax the all-or-nothing
//! error policy of the conversion itself.

use crate::app::models::StorageProvisioning;

/// Conversion result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Converted records, in input order
    pub records: Vec<StorageProvisioning>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Rows that reached the classifier (sentinel lines excluded)
    pub rows_scanned: usize,

    /// Summary rows converted to records
    pub summary_records: usize,

    /// Time-series rows converted to records
    pub time_series_records: usize,

    /// Rows skipped for carrying the unavailable marker
    pub rows_unavailable: usize,

    /// Rows matching neither row shape, dropped without record or error
    pub rows_dropped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records produced by the conversion pass
    pub fn records_parsed(&self) -> usize {
        self.summary_records + self.time_series_records
    }
}

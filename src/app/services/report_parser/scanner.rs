//! Line scanning for storage-provisioning reports
//!
//! Splits raw report text into data rows: sentinel lines are discarded,
//! every other line is split on the fixed field delimiter.

use crate::constants::{
    FIELD_DELIMITER, OUTPUT_BEGIN_MARKER, OUTPUT_END_MARKER, UNAVAILABLE_MARKER,
};

/// Single-pass iterator over the data rows of a report
///
/// Yields each non-sentinel line as its delimiter-split field list. Lines
/// outside the sentinel pair are still yielded; only the two exact marker
/// literals are special-cased. Not restartable.
#[derive(Debug)]
pub struct ReportScanner<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> ReportScanner<'a> {
    /// Create a scanner over the given report text
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
        }
    }
}

impl<'a> Iterator for ReportScanner<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;

            if line == OUTPUT_BEGIN_MARKER || line == OUTPUT_END_MARKER {
                continue;
            }

            return Some(line.split(FIELD_DELIMITER).collect());
        }
    }
}

/// Check whether any field of a row equals the unavailable marker.
///
/// The comparison is exact; surrounding whitespace makes a field ordinary.
pub fn row_is_unavailable(fields: &[&str]) -> bool {
    fields.iter().any(|field| *field == UNAVAILABLE_MARKER)
}

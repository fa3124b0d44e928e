//! Test suite for the report parser service


use chrono::{DateTime, TimeZone, Utc};

/// Fixed reference instant shared across the parser tests
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 23, 15, 30, 0).unwrap()
}

/// A single well-formed summary line
pub fn summary_line() -> &'static str {
    "10.5|||20.1|||5.0|||9.9|||100.0|||200.0|||1.1|||2.2"
}

/// Build a sentinel-wrapped report of twelve identical summary lines
pub fn summary_report() -> String {
    let mut lines = vec!["BEGINOUTPUT".to_string()];
    for _ in 0..12 {
        lines.push(summary_line().to_string());
    }
    lines.push("ENDOUTPUT".to_string());
    lines.join("\n")
}

/// Build a sentinel-wrapped report from arbitrary data lines
pub fn report_from_lines(data_lines: &[&str]) -> String {
    let mut lines = vec!["BEGINOUTPUT"];
    lines.extend_from_slice(data_lines);
    lines.push("ENDOUTPUT");
    lines.join("\n")
}

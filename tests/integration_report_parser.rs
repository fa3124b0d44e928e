//! Integration tests for the report parser through the public crate API
//!
//! These tests exercise the full conversion path the way an embedding
//! application would: raw report bytes in, record sequence or aggregated
//! failure out.

use chrono::{Duration, TimeZone, Utc};
use clap::Parser;

use provision_processor::cli::args::Args;
use provision_processor::cli::commands;
use provision_processor::{Error, ReportParser, StorageProvisioning};

fn reference_instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 23, 15, 30, 0).unwrap()
}

fn well_formed_report(time_series_rows: usize) -> String {
    let mut lines = vec!["BEGINOUTPUT".to_string()];

    for slot in 0..12 {
        let base = slot as f64;
        lines.push(
            (0..8)
                .map(|metric| (base + metric as f64 / 10.0).to_string())
                .collect::<Vec<_>>()
                .join("|||"),
        );
    }

    for point in 0..time_series_rows {
        let mut fields = vec![format!("2310{:02}:00", point + 1)];
        fields.extend((1..=8).map(|metric| (metric as f64).to_string()));
        lines.push(fields.join("|||"));
    }

    lines.push("ENDOUTPUT".to_string());
    lines.join("\n")
}

#[test]
fn test_well_formed_report_end_to_end() {
    let parser = ReportParser::new(reference_instant());
    let report = well_formed_report(3);

    let records = parser.parse_records(report.as_bytes()).unwrap();

    // Twelve scheduled windows plus one record per time-series row
    assert_eq!(records.len(), 15);

    // Input order is preserved: summary slots first, then the series
    assert_eq!(records[0].cpu_db_avg, 0.0);
    assert_eq!(records[11].cpu_db_avg, 11.0);
    assert_eq!(records[12].cpu_db_avg, 1.0);

    for record in &records[..12] {
        assert!(record.has_window());
    }
    for record in &records[12..] {
        assert!(record.is_open_ended());
    }
}

#[test]
fn test_window_schedule_end_to_end() {
    let reference = reference_instant();
    let parser = ReportParser::new(reference);
    let records = parser
        .parse_records(well_formed_report(0).as_bytes())
        .unwrap();

    assert_eq!(records[0].time_start, Some(reference - Duration::days(30)));
    assert_eq!(records[0].time_end, Some(reference));

    assert_eq!(records[1].time_start, Some(reference - Duration::days(7)));
    assert_eq!(records[1].time_end, Some(reference));

    assert_eq!(records[5].time_start, Some(reference));
    assert_eq!(records[5].time_end, None);
}

#[test]
fn test_time_series_timestamp_uses_reference_year() {
    let parser = ReportParser::new(reference_instant());
    let records = parser
        .parse_records(well_formed_report(1).as_bytes())
        .unwrap();

    // "231001:00" is day 23, month 10, 01:00, with the reference year
    assert_eq!(
        records[12].time_start,
        Some(Utc.with_ymd_and_hms(2023, 10, 23, 1, 0, 0).unwrap())
    );
}

#[test]
fn test_single_bad_field_discards_the_whole_batch() {
    let report = well_formed_report(2).replace("11.7", "not-a-number");
    let parser = ReportParser::new(reference_instant());

    let error = parser.parse_records(report.as_bytes()).unwrap_err();

    match error {
        Error::ReportParse { ref failures } => assert_eq!(failures.len(), 1),
        ref other => panic!("unexpected error variant: {other:?}"),
    }
}

#[test]
fn test_serialized_records_round_trip() {
    let parser = ReportParser::new(reference_instant());
    let records = parser
        .parse_records(well_formed_report(2).as_bytes())
        .unwrap();

    let json = serde_json::to_string(&records).unwrap();
    let decoded: Vec<StorageProvisioning> = serde_json::from_str(&json).unwrap();

    assert_eq!(records, decoded);
}

#[test]
fn test_convert_command_writes_records_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let input = temp_dir.path().join("report.txt");
    let output = temp_dir.path().join("records.json");
    std::fs::write(&input, well_formed_report(2)).unwrap();

    let args = Args::parse_from([
        "provision-processor",
        "convert",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--reference-time",
        "2023-10-23T15:30:00Z",
    ]);

    let stats = commands::run(args).unwrap();
    assert_eq!(stats.records_written, 14);

    let written = std::fs::read_to_string(&output).unwrap();
    let decoded: Vec<StorageProvisioning> = serde_json::from_str(&written).unwrap();
    assert_eq!(decoded.len(), 14);
    assert_eq!(
        decoded[0].time_start,
        Some(reference_instant() - Duration::days(30))
    );
}

#[test]
fn test_convert_command_rejects_malformed_report() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let input = temp_dir.path().join("report.txt");
    std::fs::write(&input, well_formed_report(1).replace("5.4", "xx")).unwrap();

    let args = Args::parse_from([
        "provision-processor",
        "convert",
        "--input",
        input.to_str().unwrap(),
    ]);

    assert!(commands::run(args).is_err());
}

#[test]
fn test_convert_command_rejects_missing_input() {
    let args = Args::parse_from([
        "provision-processor",
        "convert",
        "--input",
        "/nonexistent/report.txt",
    ]);

    assert!(commands::run(args).is_err());
}

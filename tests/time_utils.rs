//! Integration tests for time utilities.

use chrono::TimeZone;
use logkit::util::time::{format_duration, parse_timestamp};

#[test]
fn format_duration_sub_second() {
    let d = std::time::Duration::from_millis(350);
    let s = format_duration(d);
    assert!(
        s.contains("0.4") || s.contains("0.3"),
        "Expected ~0.3-0.4s, got: {s}"
    );
}

#[test]
fn format_duration_minutes() {
    let d = std::time::Duration::from_secs(90);
    let s = format_duration(d);
    assert!(s.contains("1.5m"), "Expected 1.5m, got: {s}");
}

#[test]
fn parse_space_separator_and_compact_offset() {
    let expected = chrono::Utc.with_ymd_and_hms(2026, 1, 30, 5, 0, 3).unwrap();
    assert_eq!(parse_timestamp("2026-01-30 06:00:03+0100").unwrap(), expected);
    assert_eq!(parse_timestamp("2026-01-30 05:00:03Z").unwrap(), expected);
}

#[test]
fn parse_minute_precision() {
    let expected = chrono::Utc.with_ymd_and_hms(2026, 1, 30, 5, 1, 0).unwrap();
    assert_eq!(parse_timestamp("2026-01-30T05:01Z").unwrap(), expected);
}

#[test]
fn parse_whitespace_trimmed() {
    assert!(parse_timestamp("  2026-01-30T05:00:03Z  ").is_ok());
}

#[test]
fn parse_invalid_returns_error() {
    assert!(parse_timestamp("not-a-date").is_err());
    assert!(parse_timestamp("2024-13-40").is_err());
    assert!(parse_timestamp("   ").is_err());
}

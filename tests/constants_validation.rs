//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use logkit::util::constants::*;

#[test]
fn default_level_is_populated() {
    assert_eq!(DEFAULT_LEVEL, "UNKNOWN");
}

#[test]
fn csv_top_default_is_positive() {
    assert!(DEFAULT_TOP_SRC_FOR_CSV > 0, "CSV export must rank something");
}

#[test]
fn csv_header_matches_json_field_names() {
    assert_eq!(CSV_HEADER, ["src_ip", "count"]);
}

#[test]
fn log_filter_parses() {
    assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}

#[test]
fn exit_failure_is_nonzero() {
    assert_ne!(EXIT_FAILURE, 0);
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
}

//! Application-wide constants for LogKit.
//!
//! Centralising defaults here keeps the rest of the codebase clean and makes
//! tuning straightforward.

/// Level assigned to events whose record carries no `level` field.
pub const DEFAULT_LEVEL: &str = "UNKNOWN";

/// Number of top source IPs reported when a CSV export of top sources is
/// requested without an explicit count.
pub const DEFAULT_TOP_SRC_FOR_CSV: usize = 5;

/// Printed to stdout when no event survives the filters.
pub const NO_EVENTS_MESSAGE: &str = "No events matched.";

/// Heading that precedes the top source IP rows in text output.
pub const TOP_SRC_HEADING: &str = "Top source IPs:";

/// Column separator between a label and its count in text output.
pub const TEXT_COLUMN_GAP: &str = "  ";

/// Header row of the top source IP CSV file.
pub const CSV_HEADER: [&str; 2] = ["src_ip", "count"];

/// Tracing filter used when `RUST_LOG` is unset. Kept at `warn` so that the
/// diagnostic stream on stderr stays quiet for normal runs.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application display name used in help text and log lines.
pub const APP_NAME: &str = "LogKit";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit code for a failed run (bad input, unreadable file, failed export).
pub const EXIT_FAILURE: u8 = 1;

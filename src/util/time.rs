//! Timestamp helpers for LogKit.
//!
//! Event timestamps and the `--since`/`--until` bounds share one parser so
//! that both sides of every comparison are interpreted identically.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::util::error::{invalid_timestamp, Result};

/// Formats carrying an explicit UTC offset. `%z` also accepts `+HH:MM`, but
/// the colon form is listed first as it is by far the most common.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Offset-less formats; these are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Accepts:
/// - `2026-01-30T05:00:03Z` (a trailing `Z` or `z` means `+00:00`)
/// - `2026-01-30T07:00:03+02:00`, `2026-01-30 07:00:03+0200`
/// - optional fractional seconds, minute precision
/// - `2026-01-30T05:00:03` and `2026-01-30` (no offset: read as UTC)
///
/// Surrounding whitespace is ignored. The result is always normalised to UTC.
///
/// # Errors
/// Returns [`crate::util::error::LogkitError::InvalidTimestamp`] for any
/// other input, including the empty string.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid_timestamp(input, "timestamp is empty"));
    }

    let normalised = match trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
    {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_owned(),
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalised, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalised, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    // Date only (midnight UTC)
    if let Ok(date) = NaiveDate::parse_from_str(&normalised, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(invalid_timestamp(
        input,
        "expected ISO-8601, e.g. 2026-01-30T05:00:03Z",
    ))
}

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used when logging how long a query took.
/// Examples: `0.3ms`, `1.2s`, `1.5m`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}

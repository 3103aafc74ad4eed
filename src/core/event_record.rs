//! Canonical data structure for a single log event.
//!
//! Every non-blank line of the input is decoded as a JSON object and
//! normalised into this struct. Field shape is never an error: missing
//! fields take a default and non-string values are rendered as text.

use serde_json::{Map, Value};

use crate::util::constants::DEFAULT_LEVEL;

/// Represents a single decoded log event.
///
/// Every field is always present. The struct is `Clone` (for callers that
/// materialise a stream) and `serde::Serialize` (for export).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    /// Raw ISO-8601 timestamp as read. Empty if the record has none.
    pub ts: String,

    /// Severity label, e.g. `"INFO"`. [`DEFAULT_LEVEL`] if absent.
    pub level: String,

    /// Free-text message. Empty if absent.
    pub msg: String,

    /// Origin address. Empty if absent, which is its own "unknown source"
    /// bucket when ranking.
    pub src_ip: String,
}

impl Event {
    /// Build an event from a decoded JSON object, coercing the four known
    /// fields and ignoring everything else.
    pub fn from_json_object(obj: &Map<String, Value>) -> Self {
        Self {
            ts: coerce_field(obj, "ts", ""),
            level: coerce_field(obj, "level", DEFAULT_LEVEL),
            msg: coerce_field(obj, "msg", ""),
            src_ip: coerce_field(obj, "src_ip", ""),
        }
    }
}

/// Read `key` from `obj` as text.
///
/// Strings are taken verbatim and a missing key yields `default`. Any other
/// value, `null` included, is rendered as its compact JSON text.
fn coerce_field(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    match obj.get(key) {
        None => default.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_from(value: Value) -> Event {
        match value {
            Value::Object(obj) => Event::from_json_object(&obj),
            other => panic!("test input must be an object, got {other}"),
        }
    }

    #[test]
    fn test_all_fields_present() {
        let e = event_from(json!({
            "ts": "2026-01-30T05:00:01Z",
            "level": "INFO",
            "msg": "heartbeat",
            "src_ip": "10.0.0.5"
        }));
        assert_eq!(e.ts, "2026-01-30T05:00:01Z");
        assert_eq!(e.level, "INFO");
        assert_eq!(e.msg, "heartbeat");
        assert_eq!(e.src_ip, "10.0.0.5");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let e = event_from(json!({}));
        assert_eq!(e.ts, "");
        assert_eq!(e.level, "UNKNOWN");
        assert_eq!(e.msg, "");
        assert_eq!(e.src_ip, "");
    }

    #[test]
    fn test_null_rendered_as_text() {
        let e = event_from(json!({ "ts": null, "level": null }));
        assert_eq!(e.ts, "null");
        assert_eq!(e.level, "null");
    }

    #[test]
    fn test_non_string_values_rendered_as_text() {
        let e = event_from(json!({ "level": 3, "msg": true, "src_ip": [10, 0, 0, 1] }));
        assert_eq!(e.level, "3");
        assert_eq!(e.msg, "true");
        assert_eq!(e.src_ip, "[10,0,0,1]");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let e = event_from(json!({ "level": "WARN", "host": "web-1" }));
        assert_eq!(e.level, "WARN");
    }
}

//! JSON rendering for query reports.
//!
//! Serialises the [`Report`] as a pretty-printed JSON object using Serde.

use crate::export::report::Report;
use crate::util::error::{LogkitError, Result};

/// Render `report` as pretty-printed JSON with two-space indentation and
/// keys in sorted order. The result has no trailing newline.
///
/// # Errors
/// Returns [`LogkitError::Export`] if serialisation fails.
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| LogkitError::Export(format!("Failed to serialise JSON: {e}")))
}

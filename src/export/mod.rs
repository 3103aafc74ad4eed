//! Rendering and writing of query results.
//!
//! [`report::Report`] is the serialisable result of one run; the sibling
//! modules render it as text, JSON, or CSV. [`emit`] sends rendered text to
//! a file or to stdout.

pub mod csv_export;
pub mod json_export;
pub mod report;
pub mod text_export;

use std::io::Write;
use std::path::Path;

use crate::util::error::{LogkitError, Result};

/// Write `text` plus a trailing newline to `out`, or print it to stdout
/// when `out` is `None`.
///
/// # Errors
/// Returns [`LogkitError::Export`] if the file or stdout cannot be written.
pub fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            csv_export::validate_export_path(path)?;
            std::fs::write(path, format!("{text}\n")).map_err(|e| {
                LogkitError::Export(format!("Failed to write {}: {e}", path.display()))
            })?;
            tracing::info!("Wrote {} bytes to {}", text.len() + 1, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")
                .and_then(|()| stdout.flush())
                .map_err(|e| LogkitError::Export(format!("Failed to write to stdout: {e}")))?;
        }
    }
    Ok(())
}

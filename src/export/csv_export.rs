//! CSV export for the top source IP ranking.
//!
//! Writes one `src_ip,count` row per ranked source after a header row.

use std::path::Path;

use crate::export::report::SourceCount;
use crate::util::constants::CSV_HEADER;
use crate::util::error::{LogkitError, Result};

/// Check that `path` can plausibly be written before doing any work.
///
/// The parent directory must exist. A bare file name refers to the current
/// directory and always passes.
///
/// # Errors
/// Returns [`LogkitError::Export`] naming the missing directory.
pub fn validate_export_path(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(LogkitError::Export(
            format!("Output directory does not exist: {}", dir.display()),
        )),
        _ => Ok(()),
    }
}

/// Export the ranked source IPs to a CSV file at `path`.
///
/// Columns: src_ip, count.
///
/// # Errors
/// Returns [`LogkitError::Export`] if the file cannot be created or written.
pub fn export_top_src_csv(rows: &[SourceCount], path: &Path) -> Result<()> {
    validate_export_path(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| LogkitError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| LogkitError::Export(format!("Failed to write CSV header: {e}")))?;

    for row in rows {
        let count = row.count.to_string();
        writer
            .write_record([row.src_ip.as_str(), count.as_str()])
            .map_err(|e| LogkitError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| LogkitError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!(
        "Exported {} source IPs to CSV: {}",
        rows.len(),
        path.display()
    );
    Ok(())
}

//! Human-readable text rendering.

use crate::export::report::Report;
use crate::util::constants::{TEXT_COLUMN_GAP, TOP_SRC_HEADING};

/// Render `report` as aligned text.
///
/// Levels are listed alphabetically, padded to the longest level name. When
/// a ranking is present it follows after an empty line and a heading. The
/// result has no trailing newline.
pub fn render_text(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();

    let width = report
        .counts_by_level
        .keys()
        .map(|level| level.chars().count())
        .max()
        .unwrap_or(0);

    for (level, count) in &report.counts_by_level {
        lines.push(format!("{level:<width$}{TEXT_COLUMN_GAP}{count}"));
    }

    if let Some(rows) = &report.top_src_ips {
        lines.push(String::new());
        lines.push(TOP_SRC_HEADING.to_owned());
        for row in rows {
            lines.push(format!("{}{TEXT_COLUMN_GAP}{}", row.src_ip, row.count));
        }
    }

    lines.join("\n")
}

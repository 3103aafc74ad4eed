//! The result of one query run, in the shape every renderer consumes.
//!
//! Field order is alphabetical at every level so the serialised JSON has
//! sorted keys.

use crate::core::stats::{LevelCounts, SourceRanking};

/// Filter settings echoed back in the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReportFilters {
    /// Case-insensitive message substring, if any.
    pub contains: Option<String>,
    /// Raw lower time bound as given.
    pub since: Option<String>,
    /// Exact source IP, if any.
    pub src_ip: Option<String>,
    /// Whether malformed lines abort the read.
    pub strict: bool,
    /// Raw upper time bound as given.
    pub until: Option<String>,
}

/// One row of the top source IP table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SourceCount {
    /// Number of matching events from this source.
    pub count: usize,
    /// Source IP; empty for events without one.
    pub src_ip: String,
}

/// Aggregated result of a run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    /// Level name → event count, sorted by level.
    pub counts_by_level: LevelCounts,
    /// The filters that produced these counts.
    pub filters: ReportFilters,
    /// Input file as given on the command line.
    pub path: String,
    /// Present only when a ranking was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_src_ips: Option<Vec<SourceCount>>,
}

impl Report {
    /// Convert a `(src_ip, count)` ranking into report rows.
    pub fn source_rows(ranking: SourceRanking) -> Vec<SourceCount> {
        ranking
            .into_iter()
            .map(|(src_ip, count)| SourceCount { count, src_ip })
            .collect()
    }

    /// `true` when no event survived the filters.
    pub fn is_empty(&self) -> bool {
        self.counts_by_level.is_empty()
    }
}

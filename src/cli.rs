//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

use logkit::util::constants::DEFAULT_TOP_SRC_FOR_CSV;

/// Count log events by level (line-delimited JSON).
#[derive(Parser, Debug, Clone)]
#[command(name = "logkit", version, about)]
pub struct Cli {
    /// Path to log file
    pub path: String,

    /// Filter to a single source IP
    #[arg(long, value_name = "IP")]
    pub src_ip: Option<String>,

    /// Only include events whose message contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub contains: Option<String>,

    /// Fail on the first bad JSON line
    #[arg(long)]
    pub strict: bool,

    /// Only include events at/after this timestamp (ISO8601, e.g. 2026-01-30T05:00:03Z)
    #[arg(long, value_name = "TIMESTAMP")]
    pub since: Option<String>,

    /// Only include events at/before this timestamp (ISO8601, e.g. 2026-01-30T05:00:04Z)
    #[arg(long, value_name = "TIMESTAMP")]
    pub until: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write output to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Do not print text output (useful when writing files)
    #[arg(long)]
    pub quiet: bool,

    /// Show top N source IPs (0 disables; negative values are rejected)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub top_src: usize,

    /// Write top source IPs as CSV to this file
    #[arg(long, value_name = "FILE")]
    pub top_src_csv: Option<PathBuf>,
}

impl Cli {
    /// Number of source IPs to rank. A CSV export without an explicit count
    /// falls back to [`DEFAULT_TOP_SRC_FOR_CSV`].
    pub fn top_n(&self) -> usize {
        if self.top_src_csv.is_some() && self.top_src == 0 {
            DEFAULT_TOP_SRC_FOR_CSV
        } else {
            self.top_src
        }
    }
}

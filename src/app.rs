//! Runs one query: read, aggregate, render, and write.
//!
//! Both aggregates come from a single pass over the input via
//! [`summarize`]; the level counts see every filter, the source ranking
//! only the message filter.

use std::time::Instant;

use logkit::core::filter::EventFilter;
use logkit::export::report::{Report, ReportFilters};
use logkit::export::text_export::render_text;
use logkit::export::{csv_export, emit, json_export};
use logkit::util::constants::NO_EVENTS_MESSAGE;
use logkit::util::time::format_duration;
use logkit::{iter_events, summarize, Result};

use crate::cli::Cli;

/// Execute the query described by `cli` and write its output.
///
/// # Errors
/// Any read, parse, or export failure. Nothing is written when the read
/// fails.
pub fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let filter = EventFilter::new(cli.src_ip.as_deref(), cli.contains.as_deref());
    let top_n = cli.top_n();

    tracing::debug!(
        path = %cli.path,
        strict = cli.strict,
        since = ?cli.since,
        until = ?cli.until,
        top_n,
        "Starting query"
    );

    let events = iter_events(
        &cli.path,
        cli.strict,
        cli.since.as_deref(),
        cli.until.as_deref(),
    )?;
    let summary = summarize(events, &filter, top_n)?;

    tracing::debug!(
        "Aggregated {} levels in {}",
        summary.counts_by_level.len(),
        format_duration(start.elapsed())
    );

    let report = Report {
        counts_by_level: summary.counts_by_level,
        filters: ReportFilters {
            contains: cli.contains.clone(),
            since: cli.since.clone(),
            src_ip: cli.src_ip.clone(),
            strict: cli.strict,
            until: cli.until.clone(),
        },
        path: cli.path.clone(),
        top_src_ips: (top_n > 0).then(|| Report::source_rows(summary.top_src_ips)),
    };

    if report.is_empty() {
        return emit(NO_EVENTS_MESSAGE, None);
    }

    if let (Some(csv_path), Some(rows)) = (&cli.top_src_csv, &report.top_src_ips) {
        csv_export::export_top_src_csv(rows, csv_path)?;
    }

    if cli.json {
        let json = json_export::render_json(&report)?;
        return emit(&json, cli.out.as_deref());
    }

    let text = render_text(&report);
    if let Some(out) = &cli.out {
        emit(&text, Some(out.as_path()))?;
    } else if !cli.quiet {
        emit(&text, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn sample_path() -> String {
        format!("{}/tests/data/sample.log", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_text_report_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.txt");
        let path = sample_path();
        let cli = Cli::parse_from([
            "logkit",
            path.as_str(),
            "--top-src",
            "1",
            "--out",
            out.to_str().unwrap(),
        ]);

        run(&cli).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            text,
            "ERROR  1\nINFO   2\nWARN   2\n\nTop source IPs:\n10.0.0.8  2\n"
        );
    }

    #[test]
    fn test_json_and_csv_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let csv_path = dir.path().join("top.csv");
        let path = sample_path();
        let cli = Cli::parse_from([
            "logkit",
            path.as_str(),
            "--json",
            "--contains",
            "login failed",
            "--out",
            out.to_str().unwrap(),
            "--top-src-csv",
            csv_path.to_str().unwrap(),
        ]);

        run(&cli).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["counts_by_level"], serde_json::json!({ "WARN": 2 }));
        assert_eq!(value["filters"]["contains"], "login failed");
        assert_eq!(value["top_src_ips"][0]["src_ip"], "10.0.0.8");

        let csv_text = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<_> = csv_text.lines().collect();
        assert_eq!(lines, ["src_ip,count", "10.0.0.8,2"]);
    }

    #[test]
    fn test_no_matches_skips_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.txt");
        let path = sample_path();
        let cli = Cli::parse_from([
            "logkit",
            path.as_str(),
            "--src-ip",
            "192.168.0.1",
            "--out",
            out.to_str().unwrap(),
        ]);

        run(&cli).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_bad_since_is_an_error() {
        let path = sample_path();
        let cli = Cli::parse_from(["logkit", path.as_str(), "--since", "last tuesday"]);
        assert!(run(&cli).is_err());
    }
}

//! Integration tests for export pre-flight validation and file output.

use logkit::export::csv_export::{export_top_src_csv, validate_export_path};
use logkit::export::emit;
use logkit::export::report::SourceCount;
use std::path::PathBuf;

#[test]
fn validate_export_path_valid_directory() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("logkit_test_export.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let path = PathBuf::from("/nonexistent_dir_12345/output.csv");
    let result = validate_export_path(&path);
    assert!(result.is_err(), "Non-existent dir should fail");
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("does not exist"),
        "Should indicate dir missing: {msg}"
    );
}

#[test]
fn validate_export_path_bare_filename() {
    assert!(validate_export_path(&PathBuf::from("just_a_filename.csv")).is_ok());
}

#[test]
fn csv_has_header_and_rows() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("top.csv");
    let rows = vec![
        SourceCount { count: 3, src_ip: "10.0.0.8".into() },
        SourceCount { count: 1, src_ip: String::new() },
    ];
    export_top_src_csv(&rows, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, ["src_ip,count", "10.0.0.8,3", ",1"]);
}

#[test]
fn emit_appends_trailing_newline() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("out.txt");
    emit("INFO  1", Some(path.as_path())).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "INFO  1\n");
}

//! End-to-end tests for the `csv-filter` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE: &str = "a,b\n1,p\n2,\"x,y\"\n-5,q\n";

fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.csv"), SAMPLE).unwrap();
    dir
}

fn csv_filter(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv-filter"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run csv-filter")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_matching_rows_as_csv() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "0", ">", "1"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "a,b\n2,x,y\n");
}

#[test]
fn quote_flag_requotes_commas() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "1", "contains", "x", "--quote"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a,b\n2,\"x,y\"\n");
}

#[test]
fn json_flag_prints_rows() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "1", "==", "p", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let rows: Vec<Vec<String>> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows, [vec!["a", "b"], vec!["1", "p"]]);
}

#[test]
fn accepts_negative_values() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "0", "<", "-2"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "a,b\n-5,q\n");
}

#[test]
fn writes_output_file() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "0", "lessOrEqual", "1", "out.csv"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    let written = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(written, "a,b\n1,p\n-5,q\n");
}

#[test]
fn column_out_of_range_fails() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "9", "==", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim_end(),
        "Error: Column index 9 exceeds available columns (2)"
    );
}

#[test]
fn unknown_operator_fails_with_status_one() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["in.csv", "0", "=~", "x"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Error: "), "stderr: {err}");
    assert!(err.contains("Invalid operator: =~"), "stderr: {err}");
}

#[test]
fn missing_input_reports_once() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["absent.csv", "0", "==", "x"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert_eq!(err.lines().count(), 1, "stderr: {err}");
    assert!(err.starts_with("Error: loading 'absent.csv': Failed to read CSV file: "));
}

#[test]
fn help_exits_successfully() {
    let dir = sample_dir();
    let output = csv_filter(dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage: csv-filter"));
}

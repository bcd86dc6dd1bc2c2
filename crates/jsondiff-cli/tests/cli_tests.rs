//! Integration tests for the `jsondiff` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the actual binary
//! against the JSON fixtures, covering the text and JSON reports, exit
//! statuses, usage handling and input errors.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn jsondiff() -> Command {
    Command::cargo_bin("jsondiff").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Text report
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn text_report_lists_every_difference_in_order() {
    let expected = "\
Differences between the two JSON files:
Value mismatch at path 'age': 30 vs 31
Value mismatch at path 'address.city': Portland vs Seattle
Missing element in first JSON at path 'tags[2]'
Type mismatch at path 'active': Boolean vs String
Missing property in second JSON at path 'legacy_id'
Missing property in first JSON at path 'email'
";

    jsondiff()
        .args([fixture("first.json"), fixture("second.json")])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn identical_files_print_only_the_header() {
    jsondiff()
        .args([fixture("first.json"), fixture("first.json")])
        .assert()
        .success()
        .stdout("Differences between the two JSON files:\n");
}

#[test]
fn summary_footer_counts_kinds() {
    jsondiff()
        .arg("--summary")
        .args([fixture("first.json"), fixture("second.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type mismatches:   1"))
        .stdout(predicate::str::contains("Value mismatches:  2"))
        .stdout(predicate::str::contains("Missing in first:  2"))
        .stdout(predicate::str::contains("Missing in second: 1"))
        .stdout(predicate::str::contains("Total:             6"));
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON report
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn json_report_is_machine_readable() {
    let output = jsondiff()
        .args(["--format", "json"])
        .args([fixture("first.json"), fixture("second.json")])
        .output()
        .expect("jsondiff should run");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report must be valid JSON");
    let differences = report["differences"].as_array().expect("differences array");
    assert_eq!(differences.len(), 6);
    assert_eq!(differences[0]["kind"], "value_mismatch");
    assert_eq!(differences[0]["path"], "age");
    assert_eq!(differences[0]["left"], 30);
    assert_eq!(differences[0]["right"], 31);
    assert_eq!(differences[3]["kind"], "type_mismatch");
    assert_eq!(differences[3]["left"], "boolean");
    assert_eq!(differences[3]["right"], "string");
    assert_eq!(report["summary"]["missing_in_left"], 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Exit status
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn exit_code_flag_fails_on_differences() {
    jsondiff()
        .arg("--exit-code")
        .args([fixture("first.json"), fixture("second.json")])
        .assert()
        .code(1);
}

#[test]
fn exit_code_flag_succeeds_on_identical_files() {
    jsondiff()
        .arg("--exit-code")
        .args([fixture("second.json"), fixture("second.json")])
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage and input errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_prints_usage() {
    jsondiff()
        .assert()
        .code(2)
        .stdout("Usage: jsondiff <file1> <file2>\n");
}

#[test]
fn three_arguments_prints_usage() {
    jsondiff()
        .args([fixture("first.json"), fixture("first.json"), fixture("first.json")])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("Usage: jsondiff"))
        .stdout(predicate::str::contains("Differences").not());
}

#[test]
fn missing_file_reports_error() {
    jsondiff()
        .args([fixture("first.json"), fixture("does-not-exist.json")])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("An error occurred: Failed to read file:"))
        .stdout(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn malformed_file_reports_parse_location() {
    jsondiff()
        .args([fixture("malformed.json"), fixture("first.json")])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("An error occurred: Failed to parse"))
        .stdout(predicate::str::contains("line 4"))
        .stdout(predicate::str::contains("Differences").not());
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    jsondiff()
        .arg("-v")
        .args([fixture("first.json"), fixture("first.json")])
        .assert()
        .success()
        .stdout("Differences between the two JSON files:\n")
        .stderr(predicate::str::contains("comparison finished"));
}

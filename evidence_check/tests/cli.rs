//! Exit status of the evidence_check binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

const PASSING: &str = "\
## Summary
All pools tracked.

## Changes
- [x] Tests pass
- [x] Documentation updated

## Verification
Ran the suite.
";

const FAILING: &str = "\
## Summary
- [ ] Tests pass
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_evidence_check"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run evidence_check")
}

fn write_report(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write report");
    file
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

#[test]
fn test_passing_report_exits_zero() {
    let report = write_report(PASSING.as_bytes());
    let output = run(&[path_arg(report.path())]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("PASS"));
}

#[test]
fn test_failing_report_exits_one() {
    let report = write_report(FAILING.as_bytes());
    let output = run(&[path_arg(report.path())]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("FAIL"));
    assert!(stdout.contains("missing section: Changes"));
    assert!(!stdout.ends_with("\n\n"));
}

#[test]
fn test_failing_report_as_json() {
    let report = write_report(FAILING.as_bytes());
    let output = run(&["--json", path_arg(report.path())]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(json["passed"], false);
    assert_eq!(json["missing_checked_items"][0], "Tests pass");
}

#[test]
fn test_missing_report_exits_two() {
    let output = run(&["/nonexistent/evidence/report.md"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unreadable_report_exits_two() {
    let report = write_report(&[0xff, 0xfe, 0x00, 0x80]);
    let output = run(&[path_arg(report.path())]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_argument_exits_two() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_custom_rules_file() {
    let rules = write_report(b"required_sections = [\"Summary\"]\nrequired_checked_items = []\n");
    let report = write_report(FAILING.as_bytes());
    let output = run(&["--rules", path_arg(rules.path()), path_arg(report.path())]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_invalid_rules_file_exits_two() {
    let rules = write_report(b"required_sections = 3\n");
    let report = write_report(PASSING.as_bytes());
    let output = run(&["--rules", path_arg(rules.path()), path_arg(report.path())]);
    assert_eq!(output.status.code(), Some(2));
}

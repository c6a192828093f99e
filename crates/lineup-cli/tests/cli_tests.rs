//! Integration tests for the `lineup` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the schedule and demo
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, format selection, and rejection of malformed input.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture.
fn events_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

/// Helper: read the events.json fixture as a string.
fn events_json() -> String {
    std::fs::read_to_string(events_json_path()).expect("events.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Schedule subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn schedule_stdin_to_stdout_table() {
    // The fixture has A (prio 1, 00-10), B (prio 5, 05-15), C (prio 2, 18-20):
    // expected plan is A until 05:00, B until 15:00, gap, then C.
    Command::cargo_bin("lineup")
        .unwrap()
        .arg("schedule")
        .write_stdin(events_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("A"))
        .stdout(predicate::str::contains("B"))
        .stdout(predicate::str::contains("2026-06-01 05:00"))
        .stdout(predicate::str::contains("2026-06-01 18:00"));
}

#[test]
fn schedule_file_input_json_output() {
    let output = Command::cargo_bin("lineup")
        .unwrap()
        .args(["schedule", "-i", events_json_path(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let segments: serde_json::Value =
        serde_json::from_slice(&output).expect("JSON output must parse");
    let segments = segments.as_array().expect("output must be a JSON array");

    assert_eq!(segments.len(), 3, "expected A, B, and C segments");
    assert_eq!(segments[0]["name"], "A");
    assert_eq!(segments[0]["end"], "2026-06-01T05:00:00Z");
    assert_eq!(segments[1]["name"], "B");
    assert_eq!(segments[1]["end"], "2026-06-01T15:00:00Z");
    assert_eq!(segments[2]["name"], "C", "the gap before C must survive");
}

#[test]
fn schedule_writes_output_file() {
    let out_path = std::env::temp_dir().join("lineup_cli_test_plan.json");
    let _ = std::fs::remove_file(&out_path);

    Command::cargo_bin("lineup")
        .unwrap()
        .args([
            "schedule",
            "-i",
            events_json_path(),
            "--format",
            "json",
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).expect("output file must exist");
    let segments: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(segments.as_array().unwrap().len(), 3);

    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn empty_event_list_schedules_nothing() {
    Command::cargo_bin("lineup")
        .unwrap()
        .arg("schedule")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("(nothing to attend)"));
}

#[test]
fn malformed_event_rejected() {
    // start == end is invalid and must fail, not silently schedule.
    let input = r#"[
        {"start": "2026-06-01T05:00:00Z", "end": "2026-06-01T05:00:00Z",
         "priority": 1, "name": "Broken"}
    ]"#;

    Command::cargo_bin("lineup")
        .unwrap()
        .arg("schedule")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed event"));
}

#[test]
fn invalid_json_rejected() {
    Command::cargo_bin("lineup")
        .unwrap()
        .arg("schedule")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input"));
}

#[test]
fn missing_input_file_rejected() {
    Command::cargo_bin("lineup")
        .unwrap()
        .args(["schedule", "-i", "/nonexistent/events.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn demo_prints_the_festival_plan() {
    // The demo day resolves to XTC, Anderson Paak, Slowdive, Sweet Trip, MBV,
    // then Anderson Paak again. Linkin Park (priority 1) is never attended.
    Command::cargo_bin("lineup")
        .unwrap()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("XTC"))
        .stdout(predicate::str::contains("Slowdive"))
        .stdout(predicate::str::contains("Sweet Trip"))
        .stdout(predicate::str::contains("MBV"))
        .stdout(predicate::str::contains("Linkin Park").not());
}

#[test]
fn demo_json_is_maximally_merged() {
    let output = Command::cargo_bin("lineup")
        .unwrap()
        .args(["demo", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let segments: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let segments = segments.as_array().unwrap();

    assert_eq!(segments.len(), 6);
    for pair in segments.windows(2) {
        let adjacent = pair[0]["end"] == pair[1]["start"];
        assert!(
            !(adjacent && pair[0]["name"] == pair[1]["name"]),
            "adjacent segments must not share a name: {:?}",
            pair
        );
    }
}

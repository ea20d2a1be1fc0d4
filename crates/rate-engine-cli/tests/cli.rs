//! End-to-end tests for the `rates` binary.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn static_rates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/rates.json")
}

fn rates_cmd(rates_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rates").unwrap();
    cmd.env("RATES_FILE", rates_file).env_remove("RUST_LOG");
    cmd
}

fn rates_file(document: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(document.to_string().as_bytes()).unwrap();
    file
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── rates ───────────────────────────────────────────────────────────────────

#[test]
fn test_list_rates() {
    let out = stdout_json(rates_cmd(&static_rates()).arg("rates"));
    let rates = out["rates"].as_array().unwrap();
    assert_eq!(rates.len(), 5);
    assert_eq!(
        rates[0],
        json!({"days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500})
    );
}

#[test]
fn test_list_rates_normalizes_days() {
    let file = rates_file(&json!({"rates": [
        {"days": " thurs,    MON,  tues", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}
    ]}));
    let out = stdout_json(rates_cmd(file.path()).arg("rates"));
    assert_eq!(out["rates"][0]["days"], "mon,tues,thurs");
}

#[test]
fn test_missing_rates_file_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_json(rates_cmd(&dir.path().join("rates.json")).arg("rates"));
    assert_eq!(out, json!({"rates": []}));
}

#[test]
fn test_invalid_rates_file_fails() {
    let file = rates_file(&json!({"rates": [
        {"days": "random", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}
    ]}));
    rates_cmd(file.path())
        .arg("rates")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'days'"));
}

// ── price ───────────────────────────────────────────────────────────────────

#[test]
fn test_price_single_rate() {
    let out = stdout_json(rates_cmd(&static_rates()).args([
        "price",
        "--start",
        "2024-02-12T09:05:00-06:00",
        "--end",
        "2024-02-12T12:00:00-06:00",
    ]));
    assert_eq!(out, json!({"price": 1500}));
}

#[test]
fn test_price_cross_day_is_zero() {
    let out = stdout_json(rates_cmd(&static_rates()).args([
        "price",
        "--start",
        "2024-02-12T23:00:00-06:00",
        "--end",
        "2024-02-13T01:00:00-06:00",
    ]));
    assert_eq!(out, json!({"price": 0}));
}

#[test]
fn test_price_ambiguous_is_zero() {
    let file = rates_file(&json!({"rates": [
        {"days": "mon", "times": "0900-1600", "tz": "America/Chicago", "price": 1000},
        {"days": "mon,fri", "times": "0900-1600", "tz": "America/Chicago", "price": 1200}
    ]}));
    let mut cmd = rates_cmd(file.path());
    cmd.args([
        "price",
        "--start",
        "2024-02-12T10:00:00-06:00",
        "--end",
        "2024-02-12T11:00:00-06:00",
    ]);
    assert_eq!(stdout_json(&mut cmd), json!({"price": 0}));

    cmd.arg("--explain");
    assert_eq!(stdout_json(&mut cmd), json!({"outcome": "ambiguous"}));
}

#[test]
fn test_price_explain_shows_amount() {
    let out = stdout_json(rates_cmd(&static_rates()).args([
        "price",
        "--explain",
        "--start",
        "2024-02-12T09:05:00-06:00",
        "--end",
        "2024-02-12T12:00:00-06:00",
    ]));
    assert_eq!(out, json!({"outcome": "price", "amount": 1500}));
}

#[test]
fn test_price_compact_offset() {
    let out = stdout_json(rates_cmd(&static_rates()).args([
        "price",
        "--start",
        "2024-02-17T10:00:00-0600",
        "--end",
        "2024-02-17T11:00:00-0600",
    ]));
    assert_eq!(out, json!({"price": 2000}));
}

#[test]
fn test_price_inverted_range_fails() {
    rates_cmd(&static_rates())
        .args([
            "price",
            "--start",
            "2024-02-12T12:00:00-06:00",
            "--end",
            "2024-02-12T09:00:00-06:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start date time must be before end date time"));
}

#[test]
fn test_price_inconsistent_offsets_fail() {
    rates_cmd(&static_rates())
        .args([
            "price",
            "--start",
            "2024-02-12T10:00:00-06:00",
            "--end",
            "2024-02-12T12:00:00-05:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Time zones of start and end times must be consistent"));
}

#[test]
fn test_price_requires_start_and_end() {
    rates_cmd(&static_rates())
        .args(["price", "--start", "2024-02-12T10:00:00-06:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start and end date times are required"));
}

#[test]
fn test_price_malformed_timestamp() {
    rates_cmd(&static_rates())
        .args(["price", "--start", "yesterday", "--end", "2024-02-12T10:00:00-06:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp"));
}

// ── check ───────────────────────────────────────────────────────────────────

#[test]
fn test_check_counts_rates() {
    rates_cmd(&static_rates())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 rates valid"));
}

#[test]
fn test_check_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    rates_cmd(&dir.path().join("rates.json"))
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rates file not found"));
}

// ── update ──────────────────────────────────────────────────────────────────

#[test]
fn test_update_from_file_replaces_rates() {
    let file = rates_file(&json!({"rates": [
        {"days": "sun, sat", "times": "0700-1900", "tz": "Europe/Amsterdam", "price": 450}
    ]}));
    let out = stdout_json(rates_cmd(&static_rates()).args([
        "update",
        "--file",
        file.path().to_str().unwrap(),
    ]));
    assert_eq!(
        out,
        json!({"rates": [
            {"days": "sat,sun", "times": "0700-1900", "tz": "Europe/Amsterdam", "price": 450}
        ]})
    );
}

#[test]
fn test_update_accepts_string_wrapped_body_on_stdin() {
    let document = json!({"rates": [
        {"days": "mon", "times": "0900-1000", "tz": "UTC", "price": 10},
        {"days": "tues", "times": "0900-1000", "tz": "UTC", "price": 20}
    ]});
    let body = Value::String(document.to_string()).to_string();
    let out = stdout_json(rates_cmd(&static_rates()).arg("update").write_stdin(body));
    let rates = out["rates"].as_array().unwrap();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[1]["price"], 20);
}

#[test]
fn test_update_invalid_record_prints_nothing() {
    let body = json!({"rates": [
        {"days": "mon", "times": "0900-1000", "tz": "UTC", "price": 10},
        {"days": "mon", "times": "0900-1000", "tz": "Invalid/Zone", "price": 10}
    ]})
    .to_string();
    rates_cmd(&static_rates())
        .arg("update")
        .write_stdin(body)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid value for 'tz'"));
}

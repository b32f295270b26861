use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const RBC_CSV: &str = "\
Account Type,Account Number,Transaction Date,Cheque Number,Description 1,Description 2,CAD$,USD$
Chequing,nnnnn-nnnnnnn,6/25/2018,,Email Trfs,INTERAC E-TRF- 6319 ,20,
Visa,4514xxxxxxxxxxxx,8/13/2018,,LYFT *RIDE MON 11AM VANCOUVER BC,,-16.61,
";

fn cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger-import").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_parse_prints_review_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rbc.csv");
    std::fs::write(&path, RBC_CSV).unwrap();

    cmd(dir.path())
        .args(["parse", "--format", "rbc", "--account-id", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email Trfs - Email Trfs"))
        .stdout(predicate::str::contains("2018-08-13"))
        .stdout(predicate::str::contains("2 transactions"));
}

#[test]
fn test_parse_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rbc.csv");
    std::fs::write(&path, RBC_CSV).unwrap();

    let output = cmd(dir.path())
        .args(["parse", "--format", "rbc", "--account-id", "7", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(json["transactions"][0]["accountId"], 7);
    assert_eq!(json["transactions"][0]["createdAt"], 1529884800000i64);
    assert_eq!(json["transactions"][1]["amount"], -16.61);
    assert_eq!(json["errors"]["base"].as_array().unwrap().len(), 0);
}

#[test]
fn test_parse_header_mismatch_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rbc.csv");
    std::fs::write(&path, RBC_CSV).unwrap();

    cmd(dir.path())
        .args(["parse", "--format", "generic", "--account-id", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid header. Expected [Date,Description,Amount]"));
}

#[test]
fn test_parse_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["parse", "--format", "rbc", "--account-id", "1"])
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_parse_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rbc.csv");
    std::fs::write(&path, RBC_CSV).unwrap();
    cmd(dir.path())
        .args(["parse", "--format", "bofa", "--account-id", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: bofa"));
}

#[test]
fn test_config_default_format_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rbc.csv");
    std::fs::write(&path, RBC_CSV).unwrap();

    cmd(dir.path())
        .args(["config", "--format", "RBC", "--currency", "cad"])
        .assert()
        .success();
    assert!(dir.path().join(".config/ledger-import/settings.json").exists());

    cmd(dir.path())
        .args(["parse", "--account-id", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("RBC Royal Bank"));
}

#[test]
fn test_parse_without_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rbc.csv");
    std::fs::write(&path, RBC_CSV).unwrap();
    cmd(dir.path())
        .args(["parse", "--account-id", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No format given"));
}

#[test]
fn test_formats_lists_every_format() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("rbc"))
        .stdout(predicate::str::contains("visa"))
        .stdout(predicate::str::contains("Date,Description,Amount"));
}

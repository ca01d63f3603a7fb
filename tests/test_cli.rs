//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

fn finpop() -> Command {
    Command::cargo_bin("finpop").unwrap()
}

#[test]
fn test_binomial_subcommand_prints_statistics() {
    finpop()
        .args(["binomial", "-n", "10", "-p", "0.5", "-x", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean"))
        .stdout(predicate::str::contains("0.246094"))
        .stdout(predicate::str::contains("PROBABILITY SERIES"));
}

#[test]
fn test_binomial_rejects_invalid_probability_at_parse_time() {
    finpop()
        .args(["binomial", "-n", "10", "-p", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0.0 and 1.0"));
}

#[test]
fn test_binomial_rejects_observed_above_sample() {
    finpop()
        .args(["binomial", "-n", "10", "-p", "0.5", "-x", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 10"));
}

#[test]
fn test_hypergeometric_subcommand_prints_median() {
    finpop()
        .args([
            "hypergeometric",
            "-N",
            "50",
            "-K",
            "20",
            "-n",
            "10",
            "-x",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Median"))
        .stdout(predicate::str::contains("0.280059"));
}

#[test]
fn test_auto_subcommand_explains_the_decision() {
    finpop()
        .args(["auto", "-N", "1000", "-K", "200", "-n", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MODEL DECISION"))
        .stdout(predicate::str::contains("Binomial"))
        .stdout(predicate::str::contains("Tip:"));
}

#[test]
fn test_auto_switches_to_hypergeometric_above_threshold() {
    finpop()
        .args(["auto", "-N", "1000", "-K", "200", "-n", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hypergeometric"))
        .stdout(predicate::str::contains("without replacement"));
}

#[test]
fn test_analyze_derives_parameters_from_csv() {
    let (_dir, path) = common::write_inspection_csv();

    finpop()
        .args([
            "analyze",
            "-i",
            path.to_str().unwrap(),
            "-n",
            "4",
            "--column",
            "status",
            "--category",
            "pass",
            "--no-confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("COLUMN ANALYSIS"))
        .stdout(predicate::str::contains("N = 8"))
        .stdout(predicate::str::contains("MODEL DECISION"));
}

#[test]
fn test_analyze_reports_unknown_column() {
    let (_dir, path) = common::write_inspection_csv();

    finpop()
        .args([
            "analyze",
            "-i",
            path.to_str().unwrap(),
            "-n",
            "4",
            "--column",
            "outcome",
            "--category",
            "pass",
            "--no-confirm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_analyze_reports_unknown_category() {
    let (_dir, path) = common::write_inspection_csv();

    finpop()
        .args([
            "analyze",
            "-i",
            path.to_str().unwrap(),
            "-n",
            "4",
            "--column",
            "status",
            "--category",
            "scrapped",
            "--no-confirm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'scrapped'"));
}

#[test]
fn test_export_writes_a_json_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let report_path = dir.path().join("report.json");

    finpop()
        .args([
            "auto",
            "-N",
            "1000",
            "-K",
            "200",
            "-n",
            "50",
            "-x",
            "10",
            "--export",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(report["metadata"]["mode"], "auto");
    assert_eq!(report["decision"]["family"], "binomial");
    assert_eq!(report["results"]["statistics"]["mean"], 10.0);
    assert!(report["chart"]["cumulative"].is_array());
}

#[test]
fn test_unsupported_input_format_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data.xlsx");
    std::fs::write(&path, b"not a real spreadsheet").unwrap();

    finpop()
        .args([
            "analyze",
            "-i",
            path.to_str().unwrap(),
            "-n",
            "4",
            "--column",
            "status",
            "--category",
            "pass",
            "--no-confirm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

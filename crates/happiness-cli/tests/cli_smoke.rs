//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `happiness` binary to verify that
//! argument parsing, rendering and error handling work end-to-end.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const DATA: &str = "\
Country Name,Regional Indicator,Year,Life Ladder,Generosity
Finland,Western Europe,2017,7.469,-0.01
Finland,Western Europe,2018,7.632,0.02
Germany,Western Europe,2018,7.1,0.1
Japan,East Asia,2018,5.9,-0.2
";

const DESCS: &str = "Life Ladder;Subjective well-being\nGenerosity;Donations residual\n";

fn cmd() -> Command {
    Command::cargo_bin("happiness").unwrap()
}

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let data = dir.join("data.csv");
    let descs = dir.join("descs.csv");
    std::fs::File::create(&data).unwrap().write_all(DATA.as_bytes()).unwrap();
    std::fs::File::create(&descs).unwrap().write_all(DESCS.as_bytes()).unwrap();
    (data, descs)
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("options"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("happiness"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_missing_data_file_errors() {
    cmd()
        .args(["render", "--data", "/nonexistent/data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist"));
}

#[test]
fn render_nonexistent_config_errors() {
    cmd()
        .args(["render", "/nonexistent/config.json"])
        .assert()
        .failure();
}

#[test]
fn render_writes_report_and_chart_spec() {
    let dir = tempfile::tempdir().unwrap();
    let (data, descs) = write_inputs(dir.path());
    let output = dir.path().join("report.html");
    let spec = dir.path().join("chart.json");

    cmd()
        .arg("render")
        .arg("--data")
        .arg(&data)
        .arg("--descriptions")
        .arg(&descs)
        .args(["--year", "2018", "--country", "Finland", "--metric", "Generosity"])
        .arg("--output")
        .arg(&output)
        .arg("--chart-spec")
        .arg(&spec)
        .args(["--compare", "Japan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data_path\""))
        .stderr(predicate::str::contains("Report for Finland of 2018"))
        .stderr(predicate::str::contains("Life Ladder 7.64 (+0.17)"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Donations residual"));

    let chart: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&spec).unwrap()).unwrap();
    assert_eq!(chart["y"]["field"], "Generosity");
    assert_eq!(chart["series"].as_array().unwrap().len(), 2);
}

#[test]
fn render_unknown_country_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (data, descs) = write_inputs(dir.path());

    cmd()
        .arg("render")
        .arg("--data")
        .arg(&data)
        .arg("--descriptions")
        .arg(&descs)
        .args(["--country", "Atlantis"])
        .arg("--output")
        .arg(dir.path().join("report.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}

// ---------------------------------------------------------------------------
// options
// ---------------------------------------------------------------------------

#[test]
fn options_lists_controls() {
    let dir = tempfile::tempdir().unwrap();
    let (data, descs) = write_inputs(dir.path());

    cmd()
        .arg("options")
        .arg("--data")
        .arg(&data)
        .arg("--descriptions")
        .arg(&descs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Years (2):"))
        .stdout(predicate::str::contains("2017, 2018"))
        .stdout(predicate::str::contains("Countries (3):"))
        .stdout(predicate::str::contains("Life Ladder: Subjective well-being"));
}

// ---------------------------------------------------------------------------
// interactive
// ---------------------------------------------------------------------------

#[test]
fn interactive_rerenders_and_survives_bad_commands() {
    let dir = tempfile::tempdir().unwrap();
    let (data, descs) = write_inputs(dir.path());
    let output = dir.path().join("session.html");

    cmd()
        .arg("interactive")
        .arg("--data")
        .arg(&data)
        .arg("--descriptions")
        .arg(&descs)
        .arg("--output")
        .arg(&output)
        .write_stdin("country Finland\ncountry Atlantis\nzoom 2\nyear 2017\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Report for Finland of 2018"))
        .stderr(predicate::str::contains("Selection rejected"))
        .stderr(predicate::str::contains("Unknown command"))
        .stderr(predicate::str::contains("Report for Finland of 2017"));

    assert!(output.exists());
}

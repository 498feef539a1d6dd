//! Integration tests for the weightplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - One-shot projections and their metrics
//! - Goal-already-reached and non-convergent messages
//! - CSV series output
//! - Interactive sessions with a weight log
//! - Configuration loading

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with no user config in scope
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("weightplan"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight loss journey planner"));
}

#[test]
fn test_default_command_shows_metrics() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Resting BMR: 1558.85 kcal/day"))
        .stdout(predicate::str::contains("Total Calories Burned: 1773.85 kcal/day"))
        .stdout(predicate::str::contains("Net Caloric Deficit: 273.85 kcal/day"))
        .stdout(predicate::str::contains("Projected Duration"))
        .stdout(predicate::str::contains("Projected End Date"))
        .stdout(predicate::str::contains("Weight (lbs)"));
}

#[test]
fn test_project_no_chart() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["project", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projected Duration"))
        .stdout(predicate::str::contains("Weight (lbs)").not());
}

#[test]
fn test_already_at_goal() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["project", "--weight", "110", "--goal", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 days (0.0 weeks)"))
        .stdout(predicate::str::contains("Already at or below goal"));
}

#[test]
fn test_non_convergent_projection_reports_message() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["project", "--intake", "2500", "--steps", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection exceeds 36500 days"))
        .stdout(predicate::str::contains("Projected Duration").not());
}

#[test]
fn test_max_days_cap() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["project", "--max-days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection exceeds 30 days"));
}

#[test]
fn test_oversized_max_days_is_rejected() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["project", "--max-days", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max days must be between 1 and 36500"));

    let config_path = temp_dir.path().join("huge.toml");
    fs::write(&config_path, "[simulation]\nmax_days = 36501\n").unwrap();
    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("project")
        .assert()
        .failure()
        .stderr(predicate::str::contains("simulation.max_days"));
}

#[test]
fn test_out_of_range_inputs_are_clamped() {
    let temp_dir = setup_test_dir();

    // Age 5 is clamped to 18
    cli(&temp_dir)
        .args(["project", "--age", "5", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resting BMR: 1624.85 kcal/day"));
}

#[test]
fn test_invalid_sex_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["project", "--sex", "robot"])
        .assert()
        .failure();
}

#[test]
fn test_csv_output() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["project", "--csv", "--weight", "121", "--goal", "120"])
        .output()
        .expect("Failed to run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("date,weight"));

    let rows: Vec<&str> = lines.collect();
    assert!(!rows.is_empty());
    assert!(rows[0].ends_with(",120.9"));
    assert!(rows.last().unwrap().ends_with(",120.0") || rows.last().unwrap().ends_with(",119.9"));
}

#[test]
fn test_session_logs_weight() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("session")
        .write_stdin("log 148.5 2024-03-01\nlog 147.0 2024-02-28\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight logged successfully!"))
        .stdout(predicate::str::contains("2024-03-01  148.5 lbs"))
        .stdout(predicate::str::contains("2024-02-28  147.0 lbs"))
        .stdout(predicate::str::contains("Session ended with 2 logged weights."));
}

#[test]
fn test_session_set_goal_recomputes() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("session")
        .write_stdin("set goal 150\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at or below goal"));
}

#[test]
fn test_session_logged_weight_drives_bmr() {
    let temp_dir = setup_test_dir();

    // 140 lbs, default profile: (635.0288 + 1047.75 - 150 - 161) * 1.1
    cli(&temp_dir)
        .arg("session")
        .write_stdin("log 140\ninputs\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resting BMR: 1508.96 kcal/day"))
        .stdout(predicate::str::contains("Current Weight: 140.0 lbs"));
}

#[test]
fn test_session_recovers_from_bad_input() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("session")
        .write_stdin("set age old\nfly\nhistory\nset intake 1200\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid input"))
        .stdout(predicate::str::contains("Unknown command 'fly'"))
        .stdout(predicate::str::contains("No weights logged yet."))
        .stdout(predicate::str::contains("Net Caloric Deficit: 573.85 kcal/day"));
}

#[test]
fn test_config_file_seeds_session() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[goal]\ncurrent_weight = 118.0\ngoal_weight = 120.0\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("project")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at or below goal"));
}

#[test]
fn test_default_config_location_is_used() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("weightplan");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[profile]\nsex = \"male\"\n",
    )
    .unwrap();

    // Female default plus 166 * 1.1
    cli(&temp_dir)
        .args(["project", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resting BMR: 1741.45 kcal/day"));
}

#[test]
fn test_missing_config_file_is_error() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--config")
        .arg(temp_dir.path().join("nope.toml"))
        .arg("project")
        .assert()
        .failure();
}

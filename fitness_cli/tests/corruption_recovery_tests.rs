//! Corruption recovery tests for fitness_cli.
//!
//! These tests verify the CLI can handle:
//! - Corrupted state files
//! - Partially written state files
//! - Rejected workouts that must not touch stored state

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fittrack"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_state_file() {
    let temp_dir = setup_test_dir();
    let state_path = temp_dir.path().join("state.json");
    fs::write(&state_path, "{ invalid json }}}}").expect("Failed to write corrupted state");

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["log", "--activity", "rowing", "--minutes", "10"])
        .args(["--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+50 XP"));

    // State file was rewritten from defaults
    let contents = fs::read_to_string(&state_path).unwrap();
    let state: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(state["progression"]["total_xp"], 50);
}

#[test]
fn test_truncated_state_file() {
    let temp_dir = setup_test_dir();
    let state_path = temp_dir.path().join("state.json");
    fs::write(&state_path, r#"{"progression":{"total_xp":12"#).unwrap();

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 1 (0 XP total)"));
}

#[test]
fn test_rejected_workout_leaves_state_untouched() {
    let temp_dir = setup_test_dir();
    let state_path = temp_dir.path().join("state.json");

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["log", "--activity", "running", "--minutes", "30"])
        .args(["--date", "2024-06-01"])
        .assert()
        .success();
    let before = fs::read_to_string(&state_path).unwrap();

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["log", "--activity", "running", "--minutes", "0"])
        .args(["--date", "2024-06-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Invalid range for duration_minutes: 0",
        ));

    let after = fs::read_to_string(&state_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_invalid_config_file_reported() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[gamification\nxp_per_minute = ").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["bmr", "--weight", "75", "--height", "175", "--age", "24"])
        .args(["--gender", "M"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: TOML error"));

    cli()
        .arg("--config")
        .arg(&config_path)
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["log", "--activity", "rowing", "--minutes", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: TOML error"));
    assert!(!temp_dir.path().join("state.json").exists());
}

#[test]
fn test_invalid_config_ignored_by_calculators() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[gamification\nxp_per_minute = ").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["calories", "--activity", "running", "--minutes", "60"])
        .args(["--weight", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories burned: 735.00 kcal"));

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["macros", "--calories-per-100g", "200", "--grams", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories: 300.00 kcal"));

    cli()
        .arg("--config")
        .arg(&config_path)
        .arg("activities")
        .assert()
        .success()
        .stdout(predicate::str::contains("running"));
}

#[test]
fn test_status_with_data_dir_skips_config() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "not = [valid").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 1 (0 XP total)"));
}

//! Integration tests for the vtb CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, temp_file};

/// vtb command isolated from the user's config, without colors.
fn vtb(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vtb").expect("vtb binary should build");
    cmd.env("VTB_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("VTB_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("moments"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--sample"));
}

#[test]
fn version_flag_prints_package_version() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn file_and_sample_are_mutually_exclusive() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .args(["talk.mp4", "--sample"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// Moments Command Tests
// ============================================================================

#[test]
fn moments_lists_built_in_set() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .arg("moments")
        .assert()
        .success()
        .stdout(predicate::str::contains("Introduction"))
        .stdout(predicate::str::contains("0:15"))
        .stdout(predicate::str::contains("▶").not());
}

#[test]
fn moments_marks_active_entry() {
    let dir = TempDir::new().unwrap();
    let output = vtb(&dir)
        .args(["moments", "--at", "44"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let active: Vec<&str> = stdout.lines().filter(|l| l.starts_with('▶')).collect();
    assert_eq!(active.len(), 1);
    assert!(active[0].contains("Key Concept Explanation"));
}

#[test]
fn moments_from_file_can_overlap() {
    let dir = TempDir::new().unwrap();
    let output = vtb(&dir)
        .args(["moments", "--at", "63.5", "--moments"])
        .arg(fixture("lecture_moments.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let active: Vec<&str> = stdout.lines().filter(|l| l.starts_with('▶')).collect();
    assert_eq!(active.len(), 2, "both nearby moments are active: {}", stdout);
    assert!(active[0].contains("Main Proof"));
    assert!(active[1].contains("Recap"));
}

#[test]
fn moments_json_round_trips_fields() {
    let dir = TempDir::new().unwrap();
    let output = vtb(&dir).args(["moments", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let moments = value.as_array().unwrap();
    assert_eq!(moments.len(), 8);
    assert_eq!(moments[0]["title"], "Introduction");
    assert_eq!(moments[0]["timestamp"], 15.0);
}

#[test]
fn moments_rejects_invalid_importance() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .args(["moments", "--moments"])
        .arg(fixture("bad_importance.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("importance 9"));
}

#[test]
fn moments_uses_file_from_config() {
    let dir = TempDir::new().unwrap();
    let config = format!(
        "[data]\nmoments_file = {:?}\n",
        fixture("lecture_moments.json").display().to_string()
    );
    std::fs::write(dir.path().join("config.toml"), config).unwrap();

    vtb(&dir)
        .arg("moments")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome"))
        .stdout(predicate::str::contains("Introduction").not());
}

// ============================================================================
// Open Command Tests
// ============================================================================

#[test]
fn open_rejects_non_video_before_starting_ui() {
    let dir = TempDir::new().unwrap();
    let (_files, image) = temp_file("slide.png", b"\x89PNG");

    vtb(&dir)
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a valid video file"));
}

#[test]
fn open_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .args(["open", "/definitely/not/here.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn open_reports_bad_segments_file() {
    let dir = TempDir::new().unwrap();
    let (_files, segments) = temp_file("segments.json", b"[{\"id\": \"x\"");

    vtb(&dir)
        .args(["--sample", "--segments"])
        .arg(&segments)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_path_honours_env_override() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            dir.path().display().to_string(),
        ));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    vtb(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("seek_step_secs = 5.0"))
        .stdout(predicate::str::contains("theme = \"studio\""));
}

#[test]
fn invalid_config_value_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[playback]\nseek_step_secs = -1.0\n",
    )
    .unwrap();

    vtb(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("playback.seek_step_secs"));
}

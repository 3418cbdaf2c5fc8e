//! End-to-end tests for the `folded-dipole-dxf` binary.
//!
//! These tests run the built binary and check exit codes and the split
//! between stdout (document only) and stderr (diagnostics).

use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("folded-dipole-dxf").expect("Binary not built");
    // Keep the user's own config out of the tests
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = bin().output().expect("Failed to run");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FREQUENCY_MHZ"));
    assert!(stdout.contains("MOUNT_OFFSET_MM"));
    assert!(stdout.contains("WIRE_RADIUS_MM"));
    assert!(stdout.lines().count() > 3);
    assert!(!stdout.contains("SECTION"));
}

#[test]
fn test_frequency_only() {
    let output = bin().arg("868").output().expect("Failed to run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("0\nSECTION\n2\nENTITIES\n"));
    assert!(stdout.ends_with("0\nENDSEC\n0\nEOF\n"));
    assert!(stdout.contains("\n868.0\n"));
    assert!(stdout.contains("\nA=60.5mm\n"));
    // Default mount offset of 3 gives callout height 1
    assert!(stdout.contains("\n40\n1.0\n1\nC="));
}

#[test]
fn test_mount_offset_and_wire_radius() {
    let output = bin()
        .args(["2400", "5", "1.0"])
        .output()
        .expect("Failed to run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\n2400.0\n"));
    assert!(stdout.contains("ENTITIES"));
}

#[test]
fn test_non_numeric_argument_fails_without_output() {
    let output = bin().args(["868", "three"]).output().expect("Failed to run");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_strict_mode_rejects_thick_wire() {
    let output = bin()
        .args(["868", "3", "20", "--strict"])
        .output()
        .expect("Failed to run");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("wire_radius"));
}

#[test]
fn test_thick_wire_draws_without_strict_mode() {
    let output = bin()
        .args(["868", "3", "20", "-q"])
        .output()
        .expect("Failed to run");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).ends_with("EOF\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_dimensions_json() {
    let output = bin()
        .args(["868", "--dimensions"])
        .output()
        .expect("Failed to run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert!((json["frequency"].as_f64().unwrap() - 868.0).abs() < f64::EPSILON);
    assert!((json["a"].as_f64().unwrap() - 60.504).abs() < 0.001);
    assert!((json["wire_radius"].as_f64().unwrap() - 0.5756).abs() < 0.0001);
}

#[test]
fn test_config_file_mount_offset() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{ "drawing": { "mount_offset": 6.0 } }"#)
        .expect("Failed to write config");

    let output = bin()
        .arg("868")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to run");

    assert!(output.status.success());
    // Callout height is mount offset / 3
    assert!(String::from_utf8_lossy(&output.stdout).contains("\n40\n2.0\n1\nC="));
}

#[test]
fn test_config_strict_mode() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{ "drawing": { "strict": true } }"#)
        .expect("Failed to write config");

    let output = bin()
        .args(["-5"])
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to run");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file() {
    let output = bin()
        .args(["868", "--config", "/nonexistent/config.json"])
        .output()
        .expect("Failed to run");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_half_way_frequency_rounds_to_even() {
    let output = bin().arg("868.125").output().expect("Failed to run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\n1\n868.12\n"));
    assert!(!stdout.contains("\n1\n868.13\n"));
}

//! Runs the built binary's `predict` command and checks exit status and stdout.

use fare_predictor::data::TripRecord;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const MANHATTAN_TRIP: [&str; 9] = [
    "2", "40.7128", "-74.0060", "40.7306", "-73.9352", "14", "10", "6", "2013",
];

fn write_linear(dir: &TempDir, feature_names: &[&str], intercept: f64) -> PathBuf {
    let artifact = json!({
        "feature_names": feature_names,
        "estimator": { "kind": "linear", "coef": vec![0.0; 9], "intercept": intercept }
    });
    let path = dir.path().join("model.json");
    fs::write(&path, artifact.to_string()).unwrap();
    path
}

fn run(model_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fare_predictor"))
        .args(args)
        .env("FARE_MODEL_PATH", model_path)
        .env("RUST_LOG", "info")
        .output()
        .expect("binary should start")
}

fn predict_args() -> Vec<&'static str> {
    let mut args = vec!["predict"];
    args.extend(MANHATTAN_TRIP);
    args
}

#[test]
fn stdout_holds_only_the_prediction() {
    let dir = TempDir::new().unwrap();
    let path = write_linear(&dir, &TripRecord::FEATURE_NAMES, 0.125);

    let output = run(&path, &predict_args());

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Predicted Fare: $0.12\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Loaded fare model"));
}

#[test]
fn prediction_failure_is_printed_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let mut names = TripRecord::FEATURE_NAMES;
    names.reverse();
    let path = write_linear(&dir, &names, 1.0);

    let output = run(&path, &predict_args());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error during prediction:"), "{}", stdout);
}

#[test]
fn unparsable_value_is_a_prediction_error() {
    let dir = TempDir::new().unwrap();
    let path = write_linear(&dir, &TripRecord::FEATURE_NAMES, 1.0);
    let mut args = predict_args();
    args[1] = "two";

    let output = run(&path, &args);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("passenger_count"), "{}", stdout);
}

#[test]
fn missing_artifact_fails_before_any_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("random_forest_pipeline.json");

    let output = run(&path, &predict_args());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("was not found").count(), 1, "{}", stderr);
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never_read.json");

    let output = run(&path, &["predict", "2", "40.7128"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("needs exactly 9 values"));
    assert!(stdout.contains("Usage:"));
}

#[test]
fn unknown_command_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir.path().join("never_read.json"), &["train"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unknown command: train"));
}

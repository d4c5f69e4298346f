//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a two-class targets file.
fn targets_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("targets.json");
    fs::write(
        &path,
        r#"[
  {
    "key": "ember-warden",
    "name": "Ember Warden",
    "color": "gold",
    "trait_range": [1, 9],
    "targets": [
      { "trait_level": 1, "target_ev": 1.0, "dice_count": 2, "color": "bronze" },
      { "trait_level": 5, "target_ev": 4.0, "dice_count": 2, "color": "silver" },
      { "trait_level": 9, "target_ev": 8.0, "dice_count": 3, "color": "gold" }
    ]
  },
  {
    "key": "tide-caller",
    "name": "Tide Caller",
    "color": "silver",
    "trait_range": [2, 8],
    "targets": [
      { "trait_level": 2, "target_ev": 2.0, "dice_count": 1, "color": "bronze" },
      { "trait_level": 8, "target_ev": 6.5, "dice_count": 2, "color": "gold" }
    ]
  }
]
"#,
    )
    .unwrap();
    (dir, path)
}

fn arcplan() -> Command {
    Command::cargo_bin("arcplan").unwrap()
}

#[test]
fn init_writes_sample_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");
    arcplan()
        .arg("init")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample targets"));
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("ember-warden"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");
    fs::write(&path, "[]").unwrap();
    arcplan()
        .arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn thresholds_prints_schedule() {
    arcplan()
        .args(["thresholds", "--faces", "6", "--min-trait", "2", "--max-trait", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("face 0: unlocks at trait 0"))
        .stdout(predicate::str::contains("face 1: unlocks at trait 0"))
        .stdout(predicate::str::contains("face 5"));
}

#[test]
fn thresholds_rejects_inverted_range() {
    arcplan()
        .args(["thresholds", "--min-trait", "9", "--max-trait", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds max trait"));
}

#[test]
fn fit_reports_per_trait_comparisons() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("fit")
        .arg("--targets")
        .arg(&path)
        .args(["--class", "ember-warden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitted d6 for Ember Warden"))
        .stdout(predicate::str::contains("Target EV"))
        .stdout(predicate::str::contains("total error"));
}

#[test]
fn fit_json_output_is_parseable() {
    let (_dir, path) = targets_file();
    let output = arcplan()
        .arg("fit")
        .arg("--targets")
        .arg(&path)
        .args(["--class", "ember-warden", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["die"]["faces"].as_array().unwrap().len(), 6);
    assert_eq!(report["trait_results"].as_array().unwrap().len(), 3);
}

#[test]
fn fit_unknown_class_lists_available_keys() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("fit")
        .arg("--targets")
        .arg(&path)
        .args(["--class", "void-walker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("ember-warden"));
}

#[test]
fn fit_with_explicit_thresholds() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("fit")
        .arg("--targets")
        .arg(&path)
        .args([
            "--class",
            "tide-caller",
            "--faces",
            "4",
            "--thresholds",
            "0,0,3,6",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitted d4"));
}

#[test]
fn fit_rejects_mismatched_thresholds() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("fit")
        .arg("--targets")
        .arg(&path)
        .args(["--class", "tide-caller", "--faces", "4", "--thresholds", "0,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unlock thresholds"));
}

#[test]
fn search_reports_every_class() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("search")
        .arg("--targets")
        .arg(&path)
        .args(["--iterations", "50", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best shared die"))
        .stdout(predicate::str::contains("Ember Warden"))
        .stdout(predicate::str::contains("Tide Caller"))
        .stdout(predicate::str::contains("search score"));
}

#[test]
fn search_is_reproducible_for_a_seed() {
    let (_dir, path) = targets_file();
    let run = || {
        arcplan()
            .arg("search")
            .arg("--targets")
            .arg(&path)
            .args(["--iterations", "40", "--seed", "11", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn search_json_has_monotonic_face_values() {
    let (_dir, path) = targets_file();
    let output = arcplan()
        .arg("search")
        .arg("--targets")
        .arg(&path)
        .args(["--iterations", "30", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let faces = report["die"]["faces"].as_array().unwrap();
    let values: Vec<f64> = faces.iter().map(|f| f["value"].as_f64().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn simulate_compares_sample_mean_to_analytic_ev() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("simulate")
        .arg("--targets")
        .arg(&path)
        .args([
            "--class",
            "ember-warden",
            "--trait-level",
            "5",
            "--dice",
            "2",
            "--rolls",
            "5000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample mean"))
        .stdout(predicate::str::contains("analytic EV"))
        .stdout(predicate::str::contains("locked-is-zero"));
}

#[test]
fn simulate_reroll_model() {
    let (_dir, path) = targets_file();
    arcplan()
        .arg("simulate")
        .arg("--targets")
        .arg(&path)
        .args([
            "--class",
            "tide-caller",
            "--trait-level",
            "3",
            "--rolls",
            "2000",
            "--reroll",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("re-roll model"));
}

#[test]
fn missing_targets_file_is_a_clean_error() {
    arcplan()
        .args(["search", "--targets", "/nonexistent/targets.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

//! End-to-end tests for the `wt` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wt() -> Command {
    Command::cargo_bin("wt").unwrap()
}

/// A small scenario with explicit terrain rows.
fn small_scenario(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("valley.json");
    fs::write(
        &path,
        r#"{
    "name": "Quiet Valley",
    "width": 0,
    "height": 0,
    "terrain": [
        "^^nn,,",
        "^n,,T.",
        "nn,%--",
        ",,.~~~"
    ],
    "creatures": [
        { "species": "dwarf", "age": 45.0 },
        { "species": "elf", "age": 120.0 }
    ],
    "civilizations": ["Aldmere", "Korrath"]
}
"#,
    )
    .unwrap();
    path
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_default_scenario() {
    wt().args(["simulate", "--ticks", "20000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Default Frontier")
                .and(predicate::str::contains("Populations"))
                .and(predicate::str::contains("live records")),
        );
}

#[test]
fn simulate_json_summary() {
    let output = wt()
        .args(["simulate", "--ticks", "5000", "--seed", "7", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["ticks"], 5000);
    assert_eq!(summary["seed"], 7);
    let kinds = summary["kinds"].as_array().unwrap();
    assert!(kinds.len() >= 150);
    for kind in kinds {
        assert!(kind["last_check"].as_u64().unwrap() > 0);
        assert!(kind["records"].as_u64().unwrap() <= kind["capacity"].as_u64().unwrap());
    }
}

#[test]
fn simulate_is_deterministic() {
    let run = || {
        wt().args(["simulate", "--ticks", "60000", "--seed", "11", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_one_family() {
    let output = wt()
        .args(["simulate", "--ticks", "3000", "--family", "terrain", "--json"])
        .output()
        .unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for kind in summary["kinds"].as_array().unwrap() {
        assert_eq!(kind["family"], "terrain");
    }
}

#[test]
fn simulate_unknown_family_fails() {
    wt().args(["simulate", "--family", "aquatic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: unknown family"));
}

#[test]
fn simulate_rejects_bad_time_step() {
    wt().args(["simulate", "--dt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time step"));
}

#[test]
fn simulate_scenario_file() {
    let dir = TempDir::new().unwrap();
    let path = small_scenario(&dir);
    wt().args(["simulate", "--ticks", "4000", "--verbose", "--scenario"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Quiet Valley")
                .and(predicate::str::contains("6x4 tiles"))
                .and(predicate::str::contains("Event Log")),
        );
}

#[test]
fn simulate_invalid_scenario_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "name": "Broken", "width": 2, "height": 1, "terrain": ["?!"] }"#)
        .unwrap();
    wt().args(["simulate", "--scenario"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn simulate_missing_scenario_fails() {
    wt().args(["simulate", "--scenario", "/nonexistent/scenario.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// kinds
// ---------------------------------------------------------------------------

#[test]
fn kinds_lists_catalog() {
    wt().arg("kinds").assert().success().stdout(
        predicate::str::contains("creature_anodizer")
            .and(predicate::str::contains("diplomatic_non_aggression"))
            .and(predicate::str::contains("world_erosion")),
    );
}

#[test]
fn kinds_filtered_by_family() {
    wt().args(["kinds", "--family", "diplomatic"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("diplomatic_rapprochement")
                .and(predicate::str::contains("creature_anodizer").not()),
        );
}

#[test]
fn kinds_shows_one_kind() {
    wt().args(["kinds", "creature_anodizer"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("anodizers")
                .and(predicate::str::contains("electrolyte_control"))
                .and(predicate::str::contains("coating_uniformity")),
        );
}

#[test]
fn kinds_shows_stage_machine() {
    wt().args(["kinds", "diplomatic_rapprochement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overture").and(predicate::str::contains("normalized")));
}

#[test]
fn kinds_shows_tile_rewrites() {
    wt().args(["kinds", "world_erosion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mountain -> hills"));
}

#[test]
fn kinds_unknown_name_suggests() {
    wt().args(["kinds", "creature_anodiser"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean \"creature_anodizer\""));
}

// ---------------------------------------------------------------------------
// scenario
// ---------------------------------------------------------------------------

#[test]
fn scenario_to_stdout() {
    let output = wt().arg("scenario").output().unwrap();
    assert!(output.status.success());
    let scenario: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(scenario["name"], "Default Frontier");
    assert_eq!(scenario["civilizations"].as_array().unwrap().len(), 6);
}

#[test]
fn scenario_round_trips_through_simulate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("frontier.json");
    wt().args(["scenario", "--out"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote scenario"));
    assert!(path.exists());

    wt().args(["simulate", "--ticks", "1000", "--scenario"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Default Frontier"));
}

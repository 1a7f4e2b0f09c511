//! End-to-end CLI integration tests: `paw run` and `paw roster` commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a five-pet roster file into a temp directory.
fn roster_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pets.json");
    fs::write(
        &path,
        r#"[
  { "name": "Biscuit", "species": "Dog", "age": 3,
    "attributes": { "sociable": 5, "loud": 4, "stubborn": 2, "curious": 4,
                    "needy": 3, "drama": 2, "energetic": 5, "territorial": 1 } },
  { "name": "Mochi", "species": "Cat", "age": "6 months",
    "attributes": { "sociable": 2, "loud": 1, "stubborn": 4, "curious": 5,
                    "needy": 2, "drama": 3, "energetic": 3, "territorial": 4 } },
  { "name": "Rex", "species": "Dog",
    "attributes": { "sociable": 4, "loud": 5, "stubborn": 5, "curious": 2,
                    "needy": 1, "drama": 4, "energetic": 4, "territorial": 5 } },
  { "name": "Luna", "species": "Cat",
    "attributes": { "sociable": 3, "loud": 2, "stubborn": 1, "curious": 4,
                    "needy": 5, "drama": 5, "energetic": 2, "territorial": 2 } },
  { "name": "Pipoca", "species": "Hamster",
    "attributes": { "sociable": 5, "loud": 3, "stubborn": 3, "curious": 3,
                    "needy": 4, "drama": 1, "energetic": 3, "territorial": 3 } }
]"#,
    )
    .unwrap();
    (dir, path)
}

fn pawhouse() -> Command {
    Command::cargo_bin("pawhouse").unwrap()
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_prints_transcript_and_winner() {
    let (_dir, path) = roster_dir();
    pawhouse()
        .args(["run", path.to_str().unwrap(), "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("seed=42")
                .and(predicate::str::contains("[Day 1]"))
                .and(predicate::str::contains("Winner:")),
        );
}

#[test]
fn run_same_seed_is_byte_identical() {
    let (_dir, path) = roster_dir();
    let invoke = || {
        pawhouse()
            .args(["run", path.to_str().unwrap(), "--seed", "42"])
            .output()
            .unwrap()
    };
    let first = invoke();
    let second = invoke();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn run_accepts_text_seeds() {
    let (_dir, path) = roster_dir();
    pawhouse()
        .args(["run", path.to_str().unwrap(), "--seed", "fluffy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed=fluffy"));
}

#[test]
fn run_without_seed_still_finishes() {
    let (_dir, path) = roster_dir();
    pawhouse()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winner:"));
}

#[test]
fn run_json_emits_the_full_outcome() {
    let (_dir, path) = roster_dir();
    let output = pawhouse()
        .args(["run", path.to_str().unwrap(), "--seed", "42", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 42);
    assert!(value["winner"].is_string());
    assert!(value["logs"].is_array());
    assert!(value["history"]["finale"].is_object());
}

#[test]
fn run_max_logs_caps_narration() {
    let (_dir, path) = roster_dir();
    let output = pawhouse()
        .args([
            "run",
            path.to_str().unwrap(),
            "--seed",
            "42",
            "--max-logs",
            "3",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let day_lines = value["logs"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|l| l.as_str().unwrap().starts_with("[Day"))
        .count();
    assert!(day_lines <= 3);
}

// ---------------------------------------------------------------------------
// error paths
// ---------------------------------------------------------------------------

#[test]
fn run_missing_file_fails() {
    pawhouse()
        .args(["run", "no-such-roster.json", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_malformed_roster_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    pawhouse()
        .args(["run", path.to_str().unwrap(), "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roster JSON"));
}

#[test]
fn run_tiny_roster_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("two.json");
    fs::write(&path, r#"[{ "name": "A" }, { "name": "B" }]"#).unwrap();
    pawhouse()
        .args(["run", path.to_str().unwrap(), "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot finish a season"));
}

// ---------------------------------------------------------------------------
// roster
// ---------------------------------------------------------------------------

#[test]
fn roster_lists_all_pets() {
    let (_dir, path) = roster_dir();
    pawhouse()
        .args(["roster", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5 pets")
                .and(predicate::str::contains("Biscuit"))
                .and(predicate::str::contains("Hamster"))
                .and(predicate::str::contains("6 months")),
        );
}

// Contract tests for `dirbot list`, `dirbot prefixed` and `dirbot standardized`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn children(path: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_dirbot_list_keeps_names_verbatim() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["list", "data-csv", "Data Excel", " data-json "]);

    cmd.assert().success();

    assert_eq!(
        children(&temp_dir.path().join("names")),
        vec!["Data Excel", "data-csv", "data-json"]
    );
}

#[test]
fn test_dirbot_list_with_flags() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["list", "Data Excel", "--lowercase", "--remove-spaces"]);

    cmd.assert().success();

    assert_eq!(children(&temp_dir.path().join("names")), vec!["dataexcel"]);
}

#[test]
fn test_dirbot_list_skips_blank_names() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["list", "   ", "kept"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Skipped empty folder name"))
        .stderr(predicate::str::contains("Skipping empty folder name"));

    assert_eq!(children(&temp_dir.path().join("names")), vec!["kept"]);
}

#[test]
fn test_dirbot_list_requires_names() {
    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.arg("list");

    cmd.assert().failure();
}

#[test]
fn test_dirbot_prefixed_concatenates() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["prefixed", "csv", "excel", "json", "--prefix", "output-"]);

    cmd.assert().success();

    assert_eq!(
        children(&temp_dir.path().join("prefixes")),
        vec!["output-csv", "output-excel", "output-json"]
    );
}

#[test]
fn test_dirbot_prefixed_does_not_normalize() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["prefixed", "CSV Files", "--prefix", "-Out "]);

    cmd.assert().success();

    assert_eq!(children(&temp_dir.path().join("prefixes")), vec!["-Out CSV Files"]);
}

#[test]
fn test_dirbot_standardized_regions() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "standardized",
            "North America",
            "South America",
            "--lowercase",
            "--remove-spaces",
        ]);

    cmd.assert().success();

    assert_eq!(
        children(&temp_dir.path().join("standardized")),
        vec!["northamerica", "southamerica"]
    );
}

#[test]
fn test_dirbot_standardized_json_lists_skipped() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["standardized", "Asia", " ", "--lowercase", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["category"], "standardized");
    assert_eq!(report["skipped"][0], " ");
    assert_eq!(report["created"].as_array().unwrap().len(), 1);
}

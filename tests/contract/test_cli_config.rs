// Contract test for configuration handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dirbot_custom_root_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("dirbot.toml"),
        "[roots]\nyears = \"calendar\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["range", "2020", "2020"]);

    cmd.assert().success();

    assert!(temp_dir.path().join("calendar").join("2020").is_dir());
    assert!(!temp_dir.path().join("years").exists());
}

#[test]
fn test_dirbot_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.toml");
    fs::write(&config_path, "[roots]\nnames = \"labels\"\n").unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--config", config_path.to_str().unwrap(), "list", "a"]);

    cmd.assert().success();

    assert!(temp_dir.path().join("labels").join("a").is_dir());
}

#[test]
fn test_dirbot_invalid_config_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("dirbot.toml"), "[roots\n").unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["range", "2020", "2021"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_dirbot_custom_log_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--log-file", "logs/run.log", "range", "1", "2"]);

    cmd.assert().success();

    let log = fs::read_to_string(temp_dir.path().join("logs").join("run.log")).unwrap();
    assert!(log.contains("create_folders_for_range"));
    assert!(!temp_dir.path().join("project.log").exists());
}

#[test]
fn test_dirbot_config_root_is_honored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("dirbot.toml"), "root = \"workspace\"\n").unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["range", "2020", "2021"]);

    cmd.assert().success();

    let root = temp_dir.path().join("workspace");
    assert!(root.join("years").join("2020").is_dir());
    assert!(root.join("years").join("2021").is_dir());
    assert!(root.join("project.log").is_file());
    assert!(!temp_dir.path().join("years").exists());
}

#[test]
fn test_dirbot_config_root_relative_to_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.toml");
    fs::write(&config_path, "root = \"out\"\n").unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--config", config_path.to_str().unwrap(), "list", "a"]);

    cmd.assert().success();

    assert!(config_dir.path().join("out").join("names").join("a").is_dir());
    assert!(!temp_dir.path().join("names").exists());
}

#[test]
fn test_dirbot_root_flag_overrides_config_root() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "root = \"from-config\"\n").unwrap();
    let cli_root = temp_dir.path().join("from-flag");

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--root",
            cli_root.to_str().unwrap(),
            "range",
            "7",
            "7",
        ]);

    cmd.assert().success();

    assert!(cli_root.join("years").join("7").is_dir());
    assert!(!temp_dir.path().join("from-config").exists());
}

#[test]
fn test_dirbot_log_file_ignores_rust_log() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dirbot").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("RUST_LOG", "off")
        .args(["range", "2020", "2020"]);

    cmd.assert().success();

    let log = fs::read_to_string(temp_dir.path().join("project.log")).unwrap();
    assert!(log.contains("Created folder:"));
}

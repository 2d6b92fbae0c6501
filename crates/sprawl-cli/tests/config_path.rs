use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url ="));
    assert!(contents.contains("animate ="));
    assert!(contents.contains("# [content.hero]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "animate = \"sometimes\"\n").unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}

#[test]
fn test_logs_are_written_under_home() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .env("SPRAWL_LOG", "debug")
        .arg("render")
        .assert()
        .success();

    let logs = dir.path().join("logs");
    assert!(logs.is_dir());
    assert!(fs::read_dir(&logs).unwrap().next().is_some());
}

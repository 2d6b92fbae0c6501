use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("sprawl")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("content"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--no-animation"));
}

#[test]
fn test_render_help_shows_options() {
    cargo_bin_cmd!("sprawl")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--at-ms"));
}

#[test]
fn test_content_show_help_lists_formats() {
    cargo_bin_cmd!("sprawl")
        .args(["content", "show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toml"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("sprawl")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_interactive_mode_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}

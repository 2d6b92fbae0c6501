use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_render_shows_every_section_and_finished_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["render", "--width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stop agent sprawl."))
        .stdout(predicate::str::contains("Control data at the source."))
        .stdout(predicate::str::contains("THE PROBLEM"))
        .stdout(predicate::str::contains("THE SOLUTION"))
        .stdout(predicate::str::contains("From chaos to control in minutes"))
        .stdout(predicate::str::contains("What changes when you stop the sprawl"))
        .stdout(predicate::str::contains("Senior Platform Engineer - Fortune 500 Retailer"))
        .stdout(predicate::str::contains("BUILT FOR SCALE"))
        .stdout(predicate::str::contains("Talk to an Engineer"))
        .stdout(predicate::str::contains("# Current data agents on this host:"))
        .stdout(predicate::str::contains("+ Node registered. Ready for pipelines."));
}

#[test]
fn test_render_at_start_shows_only_seed() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["render", "--at-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Current data agents on this host:"))
        .stdout(predicate::str::contains("splunk-forwarder").not());
}

#[test]
fn test_render_mid_session_keeps_order() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["render", "--at-ms", "1000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let splunk = stdout.find("splunk-forwarder").unwrap();
    let fluentd = stdout.find("fluentd-k8s").unwrap();
    let vector = stdout.find("vector-edge").unwrap();
    assert!(splunk < fluentd && fluentd < vector);
    assert!(!stdout.contains("custom-etl.py"));
}

#[test]
fn test_render_uses_content_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("content.toml");
    fs::write(
        &file,
        "[hero]\nheadline = \"Tame your agents.\"\nsubheadline = \"Now.\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .arg("render")
        .arg("--content")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tame your agents."))
        .stdout(predicate::str::contains("Stop agent sprawl.").not())
        .stdout(predicate::str::contains("THE PROBLEM"));
}

#[test]
fn test_render_narrow_width() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["render", "--width", "40"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().all(|line| line.chars().count() <= 40));
}

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn show_json(home: &Path, extra: &[&OsStr]) -> serde_json::Value {
    let output = cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", home)
        .args(["content", "show", "--format", "json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_show_defaults_as_toml() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["content", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[hero]"))
        .stdout(predicate::str::contains("headline = \"Stop agent sprawl.\""))
        .stdout(predicate::str::contains("[[how_it_works.steps]]"));
}

#[test]
fn test_show_defaults_as_json() {
    let dir = tempdir().unwrap();
    let content = show_json(dir.path(), &[]);

    assert_eq!(content["hero"]["headline"], "Stop agent sprawl.");
    assert_eq!(content["hero"]["cta_secondary"]["url"], "#how-it-works");
    assert_eq!(content["problem_section"]["pain_points"].as_array().unwrap().len(), 4);
}

#[test]
fn test_json_override_replaces_only_its_section() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("content.json");
    fs::write(
        &file,
        r#"{"testimonial": {"quote": "Fewer pages at 2 AM.", "author": "SRE lead"}}"#,
    )
    .unwrap();

    let content = show_json(dir.path(), &[OsStr::new("--content"), file.as_os_str()]);

    assert_eq!(content["testimonial"]["quote"], "Fewer pages at 2 AM.");
    assert_eq!(content["testimonial"]["company"], "");
    assert_eq!(content["hero"]["headline"], "Stop agent sprawl.");
}

#[test]
fn test_file_override_wins_over_config_table() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[content.hero]\nheadline = \"From config\"\n\n[content.proof]\ntitle = \"Config proof\"\n",
    )
    .unwrap();
    let file = dir.path().join("content.toml");
    fs::write(&file, "[hero]\nheadline = \"From file\"\n").unwrap();

    let content = show_json(dir.path(), &[OsStr::new("--content"), file.as_os_str()]);

    assert_eq!(content["hero"]["headline"], "From file");
    assert_eq!(content["proof"]["title"], "Config proof");
    assert_eq!(content["final_cta"]["cta_secondary"]["url"], "/book-a-demo");
}

#[test]
fn test_unknown_section_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("content.toml");
    fs::write(&file, "[pricing]\ntitle = \"Free\"\n").unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["content", "show", "--content"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("content.toml"));
}

#[test]
fn test_missing_content_file_is_reported() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sprawl")
        .env("SPRAWL_HOME", dir.path())
        .args(["content", "show", "--content", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

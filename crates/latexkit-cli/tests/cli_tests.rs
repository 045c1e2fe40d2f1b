use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("latexkit").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Replace LaTeX escape sequences"));
}

#[test]
fn test_replace_from_argument() {
    let mut cmd = Command::cargo_bin("latexkit").unwrap();
    cmd.args(["replace", "--text", "\\forall x \\in"]);

    cmd.assert().success().stdout("\\forall x ∈\n");
}

#[test]
fn test_replace_from_stdin() {
    let mut cmd = assert_cmd::Command::cargo_bin("latexkit").unwrap();
    cmd.args(["replace", "--json"]).write_stdin("f: A \\to\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"new_text\":\"f: A →\""))
        .stdout(predicate::str::contains("\"new_cursor_position\":6"));
}

#[test]
fn test_replace_invalid_cursor() {
    let mut cmd = Command::cargo_bin("latexkit").unwrap();
    cmd.args(["replace", "--text", "\\pi", "--cursor", "9"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid cursor position 9 (max: 3)"));
}

#[test]
fn test_check_exit_codes() {
    Command::cargo_bin("latexkit")
        .unwrap()
        .args(["check", "\\omega"])
        .assert()
        .success()
        .stdout("valid\n");

    Command::cargo_bin("latexkit")
        .unwrap()
        .args(["check", "\\omegaa"])
        .assert()
        .code(2)
        .stdout("invalid\n");
}

#[test]
fn test_custom_mapping_file() {
    let temp_dir = TempDir::new().unwrap();
    let mappings = temp_dir.path().join("mappings.yaml");
    std::fs::write(
        &mappings,
        "version: 1\ninclude_defaults: false\nmappings:\n  - sequence: \"->\"\n    replacement: \"→\"\n  - sequence: \"<->\"\n    replacement: \"↔\"\n",
    )
    .unwrap();

    Command::cargo_bin("latexkit")
        .unwrap()
        .args(["--mappings", mappings.to_str().unwrap()])
        .args(["replace", "--text", "a <->"])
        .assert()
        .success()
        .stdout("a ↔\n");

    Command::cargo_bin("latexkit")
        .unwrap()
        .args(["--mappings", mappings.to_str().unwrap(), "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sequence\": \"<->\""))
        .stdout(predicate::str::contains("alpha").not());
}

#[test]
fn test_missing_mapping_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.yaml");

    Command::cargo_bin("latexkit")
        .unwrap()
        .args(["--mappings", missing.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mapping file not found"));
}

#[test]
fn test_invalid_mapping_file_version() {
    let temp_dir = TempDir::new().unwrap();
    let mappings = temp_dir.path().join("mappings.json");
    std::fs::write(&mappings, r#"{"version": 3, "mappings": []}"#).unwrap();

    Command::cargo_bin("latexkit")
        .unwrap()
        .args(["--mappings", mappings.to_str().unwrap(), "check", "\\pi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported version: 3"));
}

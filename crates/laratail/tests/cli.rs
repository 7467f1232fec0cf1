//! Exit-path tests for the laratail binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn laratail(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("laratail").unwrap();
    cmd.current_dir(dir.path())
        .env("LARATAIL_NO_UPDATE_CHECK", "1");
    cmd
}

fn is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

#[test]
fn test_unknown_setup_exits_1_without_touching_disk() {
    let dir = TempDir::new().unwrap();

    laratail(&dir)
        .args(["--name", "demo", "--setup", "Install Tailwind CSS with Webpack"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid setup type."));

    assert!(is_empty(&dir));
}

#[test]
fn test_unknown_setup_without_name_fails_before_prompting() {
    let dir = TempDir::new().unwrap();

    laratail(&dir)
        .args(["--setup", "bootstrap"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid setup type."));

    assert!(is_empty(&dir));
}

#[test]
fn test_empty_name_flag_is_rejected() {
    let dir = TempDir::new().unwrap();

    laratail(&dir)
        .args(["--name", "", "--setup", "bare"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project name cannot be empty."));

    assert!(is_empty(&dir));
}

#[test]
fn test_help_lists_flags() {
    let dir = TempDir::new().unwrap();

    laratail(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--setup"))
        .stdout(predicate::str::contains("--no-watch"));
}

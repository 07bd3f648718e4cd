//! End-to-end tests running the `dartesc-bin` binary.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_rewrites_and_reports() -> Result<()> {
    let temp = TempDir::new()?;
    let lib = temp.path().join("lib");
    fs::create_dir_all(&lib)?;
    fs::write(lib.join("main.dart"), "void main() => print('héllo');\n")?;
    fs::write(lib.join("util.dart"), "int twice(int x) => x * 2;\n")?;

    let mut cmd = Command::cargo_bin("dartesc-bin")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 2 .dart files, updated 1 file(s).",
        ))
        .stdout(predicate::str::contains(
            "Backups saved as *.bak next to modified files.",
        ));

    assert_eq!(
        fs::read_to_string(lib.join("main.dart"))?,
        "void main() => print('h\\u00e9llo');\n"
    );
    assert!(lib.join("main.dart.bak").exists());
    assert!(!lib.join("util.dart.bak").exists());

    Ok(())
}

#[test]
fn test_cli_missing_root_fails() -> Result<()> {
    let temp = TempDir::new()?;

    let mut cmd = Command::cargo_bin("dartesc-bin")?;
    cmd.arg(temp.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    Ok(())
}

#[test]
fn test_cli_undecodable_file_fails() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("broken.dart"), [0xFF, 0xFE, 0x41])?;

    let mut cmd = Command::cargo_bin("dartesc-bin")?;
    cmd.arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.dart"));

    Ok(())
}

#[test]
fn test_cli_defaults_to_current_directory() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("a.dart"), "var s = \"€\";")?;

    let mut cmd = Command::cargo_bin("dartesc-bin")?;
    cmd.current_dir(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update:"))
        .stdout(predicate::str::contains("a.dart"));

    assert_eq!(fs::read_to_string(temp.path().join("a.dart"))?, "var s = \"€\";");
    Ok(())
}

#[test]
fn test_cli_verbose_logs_to_stderr() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("a.dart"), "var s = 'x';")?;

    let mut cmd = Command::cargo_bin("dartesc-bin")?;
    cmd.arg(temp.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("[VERBOSE]"))
        .stderr(predicate::str::contains("UTF-8"));

    Ok(())
}

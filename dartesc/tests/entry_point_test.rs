//! Integration tests for the application entry point.
//!
//! Tests the `run_with_args_to` function with various arguments.

#![allow(clippy::unwrap_used)]

use dartesc::entry_point::run_with_args_to;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run(args: &[&str]) -> (i32, String) {
    let mut buffer = Vec::new();
    let code = run_with_args_to(args.iter().map(|a| (*a).to_owned()).collect(), &mut buffer).unwrap();
    (code, String::from_utf8(buffer).unwrap())
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (code, output) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(output.contains("--dry-run"));
    assert!(output.contains(".dartesc.toml"));
}

#[test]
fn test_cli_version() {
    let (code, output) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_path() {
    let (code, output) = run(&["definitely/not/a/real/dir"]);
    assert_eq!(code, 1);
    assert!(output.is_empty());
}

#[test]
fn test_ascii_only_file_not_updated() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.dart");
    fs::write(&file, "void main() => print('hello');\n").unwrap();

    let (code, output) = run(&[&arg(dir.path())]);
    assert_eq!(code, 0);
    assert!(output.contains("Scanned 1 .dart files, updated 0 file(s)."));
    assert!(output.contains("Backups saved as *.bak next to modified files."));
    assert!(!dir.path().join("plain.dart.bak").exists());
}

#[test]
fn test_two_runs_keep_first_backup() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("greeting.dart");
    let original = "final greeting = \"héllo\";\n";
    fs::write(&file, original).unwrap();
    let root = arg(dir.path());

    let (_, first) = run(&[&root]);
    assert!(first.contains("updated 1 file(s)."));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "final greeting = \"h\\u00e9llo\";\n"
    );
    let backup = dir.path().join("greeting.dart.bak");
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);

    let (_, second) = run(&[&root]);
    assert!(second.contains("updated 0 file(s)."));
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.dart");
    fs::write(&file, "var s = 'ü';").unwrap();

    let (code, output) = run(&[&arg(dir.path()), "--dry-run"]);
    assert_eq!(code, 0);
    assert!(output.contains("Would update:"));
    assert!(output.contains("would update 1 file(s)."));
    assert_eq!(fs::read_to_string(&file).unwrap(), "var s = 'ü';");
    assert!(!dir.path().join("a.dart.bak").exists());
}

#[test]
fn test_json_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.dart"), "var s = 'ü';").unwrap();
    fs::write(dir.path().join("b.dart"), "var s = 'u';").unwrap();

    let (code, output) = run(&[&arg(dir.path()), "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["scanned"], 2);
    assert_eq!(value["updated"], 1);
    assert_eq!(value["backups_created"], 1);
}

#[test]
fn test_exclude_flag() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/gen.dart"), "var s = 'ü';").unwrap();
    fs::write(dir.path().join("main.dart"), "var s = 'u';").unwrap();

    let (_, output) = run(&[&arg(dir.path()), "--exclude", "build"]);
    assert!(output.contains("Scanned 1 .dart files, updated 0 file(s)."));
    assert_eq!(
        fs::read_to_string(dir.path().join("build/gen.dart")).unwrap(),
        "var s = 'ü';"
    );
}

#[test]
fn test_config_file_extension() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".dartesc.toml"),
        "[dartesc]\nextension = \"kt\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("Main.kt"), "val s = \"ß\"").unwrap();
    fs::write(dir.path().join("main.dart"), "var s = 'ß';").unwrap();

    let (_, output) = run(&[&arg(dir.path())]);
    assert!(output.contains("Scanned 1 .kt files, updated 1 file(s)."));
    assert_eq!(
        fs::read_to_string(dir.path().join("Main.kt")).unwrap(),
        "val s = \"\\u00df\""
    );

    let (_, output) = run(&[&arg(dir.path()), "--ext", "dart"]);
    assert!(output.contains("Scanned 1 .dart files, updated 1 file(s)."));
}

#[test]
fn test_utf16_file_rewritten_as_utf8() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("wide.dart");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "var s = 'é';".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&file, bytes).unwrap();

    let (code, _) = run(&[&arg(dir.path())]);
    assert_eq!(code, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), "var s = '\\u00e9';");
}

#[test]
fn test_undecodable_file_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.dart"), [0xFF, 0xFE, 0x00]).unwrap();

    let mut buffer = Vec::new();
    let result = run_with_args_to(vec![arg(dir.path())], &mut buffer);
    assert!(result.is_err());
}

//! Exit codes and output of the built binary

use crate::common::Library;
use std::process::Command;

fn releasedex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_releasedex"));
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_help_exits_zero() {
    let output = releasedex().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CONFIG"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_missing_config_argument_is_usage_error() {
    let output = releasedex().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = releasedex().args(["--frobnicate", "x.conf"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_error_exits_one() {
    let lib = Library::new();
    let path = lib.tmp.path().join("empty.conf");
    std::fs::write(&path, "# nothing configured\n").unwrap();

    let output = releasedex().arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MUSIC_DIR"), "{stderr}");
}

#[test]
fn test_successful_run_prints_summary() {
    let lib = Library::new();
    let path = lib.config_file("ENABLE_TYPES=flac\n");

    let output = releasedex().arg("--dry-run").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dry run"));
    assert!(stdout.contains("flac"));
    assert!(!stdout.contains("mp3"));
}

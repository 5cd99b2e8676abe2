//! Runs the `twinlog` binary end to end inside a scratch working directory.

#![cfg(feature = "cli")]

mod common;

use common::{log_files, read_lines};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_twinlog"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run twinlog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn console_line_matches_file_line() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--name", "worker-1", "--as", "info", "hello"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let files = log_files(&dir.path().join("logs"));
    assert_eq!(files.len(), 1, "{files:?}");
    let lines = read_lines(&files[0]);
    let last = lines.last().unwrap();

    assert_eq!(stdout(&output).trim_end(), last);
    assert!(last.contains(" - worker-1 - "), "{last}");
    assert!(last.ends_with(" - INFO - hello"), "{last}");
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
}

#[test]
fn message_words_are_joined() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["two", "words"]);
    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with(" - DEBUG - two words"));
}

#[test]
fn unknown_message_level_exits_failure() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--as", "trace", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("trace -> invalid relation"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn unknown_threshold_exits_failure_before_creating_files() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--level", "loud", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("loud -> invalid relation"));
    assert!(!dir.path().join("logs").exists());
}

#[test]
fn empty_name_exits_failure() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--name", "", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Type(str)"));
    assert!(!dir.path().join("logs").exists());
}

#[test]
fn verbose_reports_diagnostics_on_stderr() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--verbose", "hello"]);
    assert!(output.status.success());

    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("INTERNAL: Internal logger ready"), "{diagnostics}");
    assert!(diagnostics.contains("FILE: Created directory"), "{diagnostics}");
    assert!(!stdout(&output).contains("INTERNAL"));
}

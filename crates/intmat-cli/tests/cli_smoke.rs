//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `intmat` binary to verify that
//! argument parsing, file handling and exit codes work end-to-end.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("intmat").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("product"))
        .stdout(predicate::str::contains("transpose"));
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

#[test]
fn identity_prints_file_format() {
    cmd()
        .args(["identity", "2"])
        .assert()
        .success()
        .stdout("1 0 \n0 1 \n");
}

#[test]
fn constant_accepts_negative_value() {
    cmd()
        .args(["constant", "1", "3", "-4"])
        .assert()
        .success()
        .stdout("-4 -4 -4 \n");
}

#[test]
fn seeded_random_is_reproducible() {
    let run = || {
        cmd()
            .args(["random", "3", "3", "--min", "-5", "--max", "5", "--seed", "17"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn random_with_inverted_range_fails() {
    cmd()
        .args(["random", "2", "2", "--min", "5", "--max", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid random range"));
}

// ---------------------------------------------------------------------------
// File operations
// ---------------------------------------------------------------------------

#[test]
fn transpose_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.txt");
    let output = dir.path().join("t.txt");
    fs::write(&input, "1 2 3 \n4 5 6 \n").unwrap();

    cmd()
        .args(["transpose"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "1 4 \n2 5 \n3 6 \n");
}

#[test]
fn sum_with_mismatched_shapes_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "1 2 3\n4 5 6\n").unwrap();
    fs::write(&b, "1 2\n3 4\n5 6\n").unwrap();

    cmd()
        .arg("sum")
        .arg(&a)
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dimension mismatch"));
}

#[test]
fn equal_sets_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "1 2\n3 4\n").unwrap();
    fs::write(&b, "1 2\n3 5\n").unwrap();

    cmd().arg("equal").arg(&a).arg(&a).assert().success().stdout("true\n");
    cmd().arg("equal").arg(&a).arg(&b).assert().code(1).stdout("false\n");
}

#[test]
fn ragged_input_needs_lax_flag() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("ragged.txt");
    fs::write(&a, "1 2\n3\n4 5 6\n").unwrap();

    cmd()
        .arg("scale")
        .arg(&a)
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input at line 2"));

    cmd()
        .arg("scale")
        .arg(&a)
        .arg("2")
        .arg("--lax")
        .assert()
        .success()
        .stdout("2 4 \n6 8 \n10 12 \n");
}

#[test]
fn show_prints_shape_header() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    fs::write(&a, "7 8 9\n").unwrap();

    cmd()
        .arg("show")
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix 1x3"))
        .stdout(predicate::str::contains("7 8 9"));
}

#[test]
fn config_file_supplies_random_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.json");
    fs::write(&cfg, r#"{"random": {"min": 3, "max": 3, "seed": 1}}"#).unwrap();

    cmd()
        .args(["random", "1", "2", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout("3 3 \n");
}

#[test]
fn missing_input_file_fails_with_path() {
    cmd()
        .args(["transpose", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/input.txt"));
}

#[test]
fn show_accepts_largest_column_limit() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    fs::write(&a, "1 2 3\n").unwrap();

    cmd()
        .arg("show")
        .arg(&a)
        .args(["--max-cols", "18446744073709551615"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 2 3"));
}

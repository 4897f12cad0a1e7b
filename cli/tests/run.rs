//! # PipeRS CLI Run Integration Tests
//!
//! File: cli/tests/run.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! ## Overview
//!
//! Integration tests for the `pipers run` command. These exercise the
//! compiled binary end to end: assembling pipelines from stage strings,
//! connecting stages with pipes, capture behavior, exit-code conventions,
//! and the working-directory flag. The commands used (`echo`, `tr`, `ls`,
//! `true`, `false`) are standard on any Unix-like test machine.
//!

// Declare and use the common module
mod common;
use common::*;

use predicates::prelude::*;

/// # Test Run Single Stage (`test_run_single_stage`)
///
/// Verifies that a one-stage pipeline prints its captured output.
#[test]
fn test_run_single_stage() {
    pipers_cmd()
        .args(["run", "echo hello"])
        .assert()
        .success()
        .stdout("hello\n");
}

/// # Test Run Connects Stages (`test_run_connects_stages`)
///
/// Verifies that adjacent stages are joined by real pipes: the first
/// stage's stdout must reach the second stage's stdin.
#[test]
fn test_run_connects_stages() {
    pipers_cmd()
        .args(["run", "echo hello", "tr a-z A-Z"])
        .assert()
        .success()
        .stdout("HELLO\n");
}

/// # Test Run Alias (`test_run_alias`)
///
/// Verifies the short `r` alias resolves to the run command.
#[test]
fn test_run_alias() {
    pipers_cmd()
        .args(["r", "echo aliased"])
        .assert()
        .success()
        .stdout("aliased\n");
}

/// # Test Run Without Capture (`test_run_without_capture`)
///
/// Verifies that `--no-capture` still delivers stage output, inherited
/// through the binary's own stdout rather than captured and re-emitted.
#[test]
fn test_run_without_capture() {
    pipers_cmd()
        .args(["run", "--no-capture", "echo hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hi"));
}

/// # Test Run Statuses Flag (`test_run_statuses_flag`)
///
/// Verifies that `--statuses` reports each stage and its exit status on
/// stderr, leaving stdout for pipeline output only.
#[test]
fn test_run_statuses_flag() {
    pipers_cmd()
        .args(["run", "--statuses", "echo ok"])
        .assert()
        .success()
        .stdout("ok\n")
        .stderr(predicate::str::contains("exit status: 0"))
        .stderr(predicate::str::contains("echo ok"));
}

/// # Test Run Failing Tail (`test_run_failing_tail`)
///
/// Verifies the shell convention: the run fails (exit code 1) when the
/// final stage exits unsuccessfully, and the error names the pipeline.
#[test]
fn test_run_failing_tail() {
    pipers_cmd()
        .args(["run", "false"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Pipeline command failed"));
}

/// # Test Run Failing Head Is Tolerated (`test_run_failing_head_is_tolerated`)
///
/// Verifies that a non-zero status in a non-final stage does not fail the
/// run; only the final stage's status decides.
#[test]
fn test_run_failing_head_is_tolerated() {
    pipers_cmd()
        .args(["run", "false", "true"])
        .assert()
        .success();
}

/// # Test Run Missing Binary (`test_run_missing_binary`)
///
/// Verifies that a stage that cannot launch produces a launch error and a
/// failing exit code, with no pipeline output.
#[test]
fn test_run_missing_binary() {
    pipers_cmd()
        .args(["run", "/definitely/not/a/real/binary"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to launch stage"));
}

/// # Test Run Workdir Flag (`test_run_workdir_flag`)
///
/// Verifies that `-C` runs every stage in the given directory.
#[test]
fn test_run_workdir_flag() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("marker.txt"), "").expect("write marker");
    pipers_cmd()
        .args(["run", "-C"])
        .arg(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("marker.txt"));
}

/// # Test Run Captured Stderr Is Re-emitted (`test_run_reemits_stage_stderr`)
///
/// Verifies that text a stage writes to stderr comes back out on the
/// binary's stderr, not its stdout. Uses `ls` on a missing path, which
/// complains on stderr and exits non-zero.
#[test]
fn test_run_reemits_stage_stderr() {
    pipers_cmd()
        .args(["run", "ls /definitely/not/a/real/path"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("/definitely/not/a/real/path"));
}

/// # Test Run Blank Stage Rejected (`test_run_blank_stage_rejected`)
///
/// Verifies that a whitespace-only stage string is reported as an error
/// before anything launches.
#[test]
fn test_run_blank_stage_rejected() {
    pipers_cmd()
        .args(["run", "echo hi", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Empty pipeline stage"));
}

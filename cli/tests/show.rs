//! # PipeRS CLI Show Integration Tests
//!
//! File: cli/tests/show.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! ## Overview
//!
//! Integration tests for the `pipers show` command: rendering pipelines
//! from stage strings without executing anything.
//!

// Declare and use the common module
mod common;
use common::*;

use predicates::prelude::*;

/// # Test Show Renders Pipeline (`test_show_renders_pipeline`)
///
/// Verifies that stages are split on whitespace and joined with " | ".
#[test]
fn test_show_renders_pipeline() {
    pipers_cmd()
        .args(["show", "ls -l", "grep toml", "wc -l"])
        .assert()
        .success()
        .stdout("ls -l | grep toml | wc -l\n");
}

/// # Test Show Alias (`test_show_alias`)
///
/// Verifies the short `s` alias resolves to the show command.
#[test]
fn test_show_alias() {
    pipers_cmd()
        .args(["s", "echo hi"])
        .assert()
        .success()
        .stdout("echo hi\n");
}

/// # Test Show Does Not Execute (`test_show_does_not_execute`)
///
/// Verifies that show only renders: a stage that could never launch is
/// still shown successfully.
#[test]
fn test_show_does_not_execute() {
    pipers_cmd()
        .args(["show", "/definitely/not/a/real/binary --flag"])
        .assert()
        .success()
        .stdout("/definitely/not/a/real/binary --flag\n");
}

/// # Test Show Blank Stage Rejected (`test_show_blank_stage_rejected`)
///
/// Verifies that a whitespace-only stage string is an error, matching the
/// run command's parsing exactly.
#[test]
fn test_show_blank_stage_rejected() {
    pipers_cmd()
        .args(["show", "  "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Empty pipeline stage"));
}

/// # Test Show Requires A Stage (`test_show_requires_stage`)
///
/// Verifies that invoking show with no stages is a usage error.
#[test]
fn test_show_requires_stage() {
    pipers_cmd().arg("show").assert().failure();
}

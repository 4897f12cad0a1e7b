//! # PipeRS Run Command (`commands/run.rs`)
//!
//! File: cli/src/commands/run.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Implements the `pipers run` command. Each positional argument is one
//! pipeline stage written as a plain string (`"grep -i error"`); the command
//! chains them left to right, executes the pipeline, re-emits any captured
//! output, and mirrors the shell's convention for the exit code: the run
//! fails if and only if the final stage did (or a stage never launched).
//!
//! ## Workflow
//!
//! 1. Load configuration for defaults (working directory, capture behavior).
//! 2. Resolve flags against those defaults; flags win.
//! 3. Assemble a `Cmd` descriptor from the stage strings.
//! 4. Execute the pipeline, keeping failure reasons.
//! 5. Re-emit captured stderr per stage and the tail's captured stdout.
//! 6. Optionally print per-stage exit statuses.
//! 7. Succeed or fail on the final stage's status.
//!
//! ## Usage
//!
//! ```bash
//! # Count TOML files in the current directory
//! pipers run "ls -l" "grep toml" "wc -l"
//!
//! # Stream output directly instead of capturing it
//! pipers run --no-capture "cat big.log" "grep ERROR"
//!
//! # Show what every stage exited with
//! pipers run --statuses "true" "false"
//! ```
//!
use crate::common::chain;
use crate::core::config;
use anyhow::{anyhow, Context};
use clap::Parser;
use pipers::{PipersError, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Run Command Arguments (`RunArgs`)
///
/// Defines arguments for the `pipers run` command.
#[derive(Parser, Debug)]
#[command(
    about = "Run a pipeline of commands connected by pipes",
    long_about = "Runs the given stages as one pipeline, each stage's standard output\n\
                  feeding the next stage's standard input. A stage is a single string,\n\
                  split on whitespace into program and arguments."
)]
pub struct RunArgs {
    /// Pipeline stages, head first. Each stage is one string, e.g. "grep -i error".
    #[arg(required = true, value_name = "STAGE")]
    pub stages: Vec<String>,

    /// Working directory for every stage (defaults to the current directory,
    /// or `defaults.workdir` from configuration).
    #[arg(short = 'C', long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Stream stage output directly instead of capturing it. Captured runs
    /// hold output back until every stage has exited.
    #[arg(long)]
    pub no_capture: bool,

    /// Print each stage's exit status to stderr after the run.
    #[arg(long)]
    pub statuses: bool,
}

/// # Handle Run Command (`handle_run`)
///
/// Assembles the pipeline described by `args` and executes it.
///
/// ## Arguments
///
/// * `args` - Parsed `RunArgs` from Clap.
///
/// ## Returns
///
/// * `Ok(())` - The pipeline ran and its final stage exited successfully.
/// * `Err(...)` - A stage failed to launch, captured output could not be
///   read, or the final stage exited unsuccessfully.
pub fn handle_run(args: RunArgs) -> Result<()> {
    info!("Handling run command...");
    debug!("Run args: {:?}", args);

    // 1. Load configuration for defaults.
    let cfg = config::load_config().context("Failed to load PipeRS configuration")?;

    // 2. Resolve effective settings. Command-line flags override config.
    let capture = !args.no_capture && cfg.defaults.capture;
    let workdir = args
        .workdir
        .clone()
        .or_else(|| cfg.defaults.workdir.as_ref().map(PathBuf::from));
    debug!("Effective capture={}, workdir={:?}", capture, workdir);

    // 3. Assemble the descriptor from the stage strings.
    let cmd = chain::build_chain(&args.stages, workdir.as_deref())?;
    info!("Running pipeline: {}", cmd);

    // 4. Execute, keeping launch/drain failure reasons for the error report.
    let report = cmd
        .try_execute(capture)
        .with_context(|| format!("Failed to run pipeline '{}'", cmd))?;

    // 5. Re-emit captured text so the command behaves like the shell would:
    //    stage stderr to our stderr, tail stdout to our stdout.
    if capture {
        for text in &report.stderr {
            if !text.is_empty() {
                eprint!("{}", text);
            }
        }
        if let Some(out) = &report.stdout {
            print!("{}", out);
        }
        std::io::stdout()
            .flush()
            .context("Failed to flush pipeline output")?;
    }

    // 6. Optionally report per-stage statuses.
    if args.statuses {
        for (stage, status) in cmd.stages().iter().zip(&report.statuses) {
            eprintln!("[{}] {}", status, stage.describe());
        }
    }

    // 7. Mirror the shell: the pipeline fails if its final stage did.
    let status = report
        .final_status()
        .ok_or_else(|| anyhow!("Pipeline produced no exit status"))?;
    if status.success() {
        info!("Pipeline '{}' succeeded.", cmd);
        Ok(())
    } else {
        Err(anyhow!(PipersError::ExternalCommand {
            cmd: cmd.describe(),
            status: status.to_string(),
        }))
    }
}

// --- Unit Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    // Test parsing a single stage with no flags.
    #[test]
    fn test_parse_single_stage() {
        let args = RunArgs::try_parse_from(["run", "echo hello"]).unwrap();
        assert_eq!(args.stages, vec!["echo hello"]);
        assert!(args.workdir.is_none());
        assert!(!args.no_capture);
        assert!(!args.statuses);
    }

    // Test parsing multiple stages with every flag set.
    #[test]
    fn test_parse_stages_and_flags() {
        let args = RunArgs::try_parse_from([
            "run",
            "--no-capture",
            "--statuses",
            "-C",
            "/tmp",
            "ls -l",
            "wc -l",
        ])
        .unwrap();
        assert_eq!(args.stages, vec!["ls -l", "wc -l"]);
        assert_eq!(args.workdir.as_deref(), Some(std::path::Path::new("/tmp")));
        assert!(args.no_capture);
        assert!(args.statuses);
    }

    // Test that at least one stage is required.
    #[test]
    fn test_parse_requires_stage() {
        assert!(RunArgs::try_parse_from(["run"]).is_err());
    }

    // Test the long form of the workdir flag.
    #[test]
    fn test_parse_workdir_long_flag() {
        let args = RunArgs::try_parse_from(["run", "--workdir", "/srv", "ls"]).unwrap();
        assert_eq!(args.workdir.as_deref(), Some(std::path::Path::new("/srv")));
    }
}

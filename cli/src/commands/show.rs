//! # PipeRS Show Command (`commands/show.rs`)
//!
//! File: cli/src/commands/show.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Implements the `pipers show` command: assemble a pipeline from stage
//! strings exactly as `pipers run` would, then print its rendering instead
//! of executing it. Useful for checking how stage strings will be split and
//! chained before committing to a run.
//!
//! ## Usage
//!
//! ```bash
//! pipers show "ls -l" "grep toml" "wc -l"
//! # prints: ls -l | grep toml | wc -l
//! ```
//!
use crate::common::chain;
use clap::Parser;
use pipers::Result;
use tracing::debug;

/// # Show Command Arguments (`ShowArgs`)
///
/// Defines arguments for the `pipers show` command.
#[derive(Parser, Debug)]
#[command(about = "Print a pipeline's rendering without running it")]
pub struct ShowArgs {
    /// Pipeline stages, head first. Each stage is one string, e.g. "grep -i error".
    #[arg(required = true, value_name = "STAGE")]
    pub stages: Vec<String>,
}

/// # Handle Show Command (`handle_show`)
///
/// Assembles the described pipeline and prints it. Nothing is executed.
pub fn handle_show(args: ShowArgs) -> Result<()> {
    debug!("Show args: {:?}", args);
    let cmd = chain::build_chain(&args.stages, None)?;
    println!("{}", cmd);
    Ok(())
}

// --- Unit Tests ---

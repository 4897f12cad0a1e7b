//! # PipeRS Stage Chain Assembly (`common/chain.rs`)
//!
//! File: cli/src/common/chain.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Converts the stage strings the CLI accepts (`"grep -i error"`) into a
//! chained [`pipers::Cmd`] descriptor. Each string is split on whitespace:
//! the first word is the program, the rest are its arguments. There is no
//! quoting or shell interpretation; an argument that needs embedded spaces
//! needs the library API, not the CLI.

use anyhow::anyhow;
use pipers::{Cmd, PipersError, Result};
use std::path::Path;

/// # Build Stage Chain (`build_chain`)
///
/// Turns a list of stage strings into one chained descriptor, head first.
///
/// ## Arguments
///
/// * `stages` - One string per stage; whitespace-split into program and
///   arguments.
/// * `workdir` - Optional working directory applied to every stage.
///
/// ## Returns
///
/// * `Ok(cmd)` - The assembled descriptor.
/// * `Err(...)` - A stage string was empty or only whitespace, or the list
///   itself was empty.
pub fn build_chain(stages: &[String], workdir: Option<&Path>) -> Result<Cmd> {
    let mut chain: Option<Cmd> = None;

    for spec in stages {
        let mut words = spec.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| anyhow!(PipersError::EmptyStage(spec.clone())))?;

        let mut stage = Cmd::with_args(program, words);
        if let Some(dir) = workdir {
            stage = stage.cwd(dir);
        }

        chain = Some(match chain {
            Some(prior) => prior.pipe_to(stage),
            None => stage,
        });
    }

    // Clap marks the stage list as required, but check defensively.
    chain.ok_or_else(|| anyhow!(PipersError::EmptyStage(String::new())))
}

// --- Unit Tests ---

//! # PipeRS Pipeline Engine (`pipeline/mod.rs`)
//!
//! File: lib/src/pipeline/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Turns a [`Cmd`](crate::Cmd) descriptor into running processes. The work
//! is split into two phases with a hard line between them:
//!
//! - **Build** ([`Pipeline::build`], in `build.rs`): translate each stage of
//!   the descriptor into a prepared `std::process::Command` with its stream
//!   dispositions decided. Nothing is spawned.
//! - **Run** ([`Pipeline::run`], in `run.rs`): spawn every stage head to
//!   tail, wiring each stage's stdout into the next stage's stdin, wait for
//!   all of them in order, then drain any captured output into a
//!   [`RunReport`].
//!
//! A `Pipeline` is single-use: `run` consumes it. Building twice from the
//! same descriptor yields two fully independent pipelines.
//!
//! ## Architecture
//!
//! - **`build`**: `Pipeline`, `PreparedStage`, stream disposition rules.
//! - **`run`**: launching, failure cleanup, waiting, draining, `RunReport`.

mod build;
mod run;

pub use build::Pipeline;
pub use run::RunReport;

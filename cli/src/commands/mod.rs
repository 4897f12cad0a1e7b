//! # PipeRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the PipeRS CLI.
//! It serves as the central point for importing and re-exporting command modules
//! to make them accessible to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! Each command lives in its own module and follows the same shape:
//! - An arguments structure derived with Clap (`RunArgs`, `ShowArgs`)
//! - A handler function (`handle_run`, `handle_show`) that consumes the
//!   arguments and returns a `Result`
//!
//! ## Commands
//!
//! - `run`: Assemble a pipeline from stage strings and execute it
//! - `show`: Assemble a pipeline and print its rendering without running it
//!

/// Command for assembling and executing a pipeline from stage strings.
pub mod run;
/// Command for rendering a pipeline without executing it.
pub mod show;

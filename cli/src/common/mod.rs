//! # PipeRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module serves as the root for shared utilities used by the PipeRS
//! command handlers. Keeping them under the `common::` namespace separates
//! command-specific logic (`commands::`) from code that more than one
//! command needs.
//!
//! ## Architecture
//!
//! - **`chain`**: Turns the stage strings given on the command line into a
//!   `pipers::Cmd` descriptor. Used by both `run` and `show` so the two
//!   commands can never disagree about how stages are parsed.

/// Assembles `pipers::Cmd` descriptors from command-line stage strings.
pub mod chain;

//! # PipeRS Core Infrastructure (`core/mod.rs`)
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure of the PipeRS CLI binary.
//! Currently that is configuration loading; error handling types come from
//! the `pipers` library crate (`pipers::PipersError`, `pipers::Result`) so
//! the binary and the library share one error vocabulary.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation

/// Configuration loading, merging, expansion, and validation.
pub mod config;

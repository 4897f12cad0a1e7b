//! # PipeRS Core Functionality (`core/mod.rs`)
//!
//! File: lib/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module aggregates core infrastructure shared by the rest of the
//! library. Currently this is the error handling strategy; concerns like
//! configuration loading live in the CLI crate, which is where they are
//! consumed.
//!
//! ## Architecture
//!
//! - **`error`**: Defines the custom `PipersError` enum and the standard
//!   `Result<T>` alias (built on `anyhow`) used across the library and CLI.

/// Defines error handling types (`PipersError`, `Result`) for the application.
pub mod error;

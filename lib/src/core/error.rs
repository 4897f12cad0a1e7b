//! # PipeRS Error Handling (`core/error.rs`)
//!
//! File: lib/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Defines the custom error type (`PipersError`) used throughout the PipeRS
//! library and CLI, along with a standard `Result` type alias. This module
//! establishes the error handling strategy, which combines specific, typed
//! errors for known failure conditions (using `thiserror`) with flexible
//! error wrapping and context propagation (using `anyhow`).
//!
//! ## Strategy
//!
//! - **`PipersError` Enum:** Defines distinct variants for the failure points
//!   a pipeline can hit: launching a stage, waiting on it, and draining its
//!   captured output. A stage that runs to completion with a non-zero exit
//!   status is *not* an error at this level; exit statuses are plain data in
//!   a [`RunReport`](crate::RunReport), and only callers that choose to treat
//!   failure as fatal (like the CLI) convert one into `ExternalCommand`.
//! - **`anyhow` Integration:** The `Result<T>` alias uses `anyhow::Error`,
//!   letting functions add context (e.g., which pipeline was being run) as
//!   errors propagate up the call stack.
//!
//! ## Examples
//!
//! ```rust
//! use pipers::{Cmd, Result};
//!
//! fn shouting_hello() -> Result<String> {
//!     let report = Cmd::new("echo")
//!         .arg("hello")
//!         .pipe_to(Cmd::with_args("tr", ["a-z", "A-Z"]))
//!         .try_execute(true)?; // Propagates launch/drain errors with context.
//!     Ok(report.stdout.unwrap_or_default())
//! }
//! ```

use thiserror::Error;

/// Core error enum for PipeRS operations.
///
/// Uses `thiserror` to derive `std::error::Error` and `Display` implementations.
/// Variants cover the distinct stages at which running a pipeline can fail, plus
/// the conditions the CLI layer reports. Spawn and I/O failures keep their
/// underlying `std::io::Error` as a `source` so callers can inspect the OS-level
/// cause.
#[derive(Error, Debug)]
pub enum PipersError {
    /// Error spawning a stage's process (e.g., executable not found,
    /// permission denied, or an invalid working directory).
    #[error("Failed to launch stage '{stage}': {source}")]
    Launch {
        /// Rendered command line of the stage that failed to start.
        stage: String,
        /// The underlying OS error from `std::process::Command::spawn`.
        #[source]
        source: std::io::Error,
    },

    /// Error while waiting for a launched stage to exit.
    #[error("Failed while waiting on stage '{stage}': {source}")]
    Wait {
        /// Rendered command line of the stage being waited on.
        stage: String,
        /// The underlying OS error from `std::process::Child::wait`.
        #[source]
        source: std::io::Error,
    },

    /// Error reading a stage's captured output after it exited. This includes
    /// output that is not valid UTF-8, which surfaces as an
    /// `std::io::ErrorKind::InvalidData` read failure.
    #[error("Failed to drain captured {stream} of stage '{stage}': {source}")]
    Drain {
        /// Which captured stream failed (`"stdout"` or `"stderr"`).
        stream: &'static str,
        /// Rendered command line of the stage whose output was being read.
        stage: String,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// A pipeline stage definition contained no executable (e.g., an empty or
    /// whitespace-only stage string given to the CLI).
    #[error("Empty pipeline stage: '{0}'")]
    EmptyStage(String),

    /// A pipeline ran to completion but its final stage exited unsuccessfully.
    /// Used by callers (like the `pipers run` command) that treat a non-zero
    /// exit status as fatal.
    #[error("Pipeline command failed: {cmd}, Status: {status}")]
    ExternalCommand {
        /// Rendered command line of the full pipeline.
        cmd: String,
        /// String representation of the final stage's exit status.
        status: String,
    },

    /// Errors related to loading, parsing, merging, or validating configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Standard Result type used throughout the PipeRS application.
///
/// Uses `anyhow::Error` as the error type for flexibility in error handling
/// and context propagation. `PipersError` values are typically wrapped in an
/// `anyhow::Error` when returned from fallible operations.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---

//! # PipeRS Library (`lib.rs`)
//!
//! File: lib/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! PipeRS makes subprocess pipelines (`ls | grep foo | wc -l`) a first-class
//! value in Rust programs. A pipeline is described with [`Cmd`], a chainable
//! descriptor that is pure data; nothing touches the operating system until
//! an execution method is called. Running a pipeline launches every stage,
//! connects adjacent stages with real kernel pipes, waits for all of them,
//! and reports one exit status per stage plus optionally captured output.
//!
//! The library deliberately separates three phases:
//!
//! 1. **Describe** ([`Cmd`]): build and chain descriptors, render them for
//!    humans, clone and reuse them freely.
//! 2. **Build** ([`Pipeline::build`]): translate a descriptor into prepared
//!    `std::process::Command`s with stream dispositions decided. Infallible,
//!    spawns nothing.
//! 3. **Run** ([`Pipeline::run`]): spawn, wire, wait, drain; produce a
//!    [`RunReport`].
//!
//! Most callers never touch `Pipeline` directly; the convenience methods on
//! `Cmd` ([`Cmd::run`], [`Cmd::output`], [`Cmd::execute`],
//! [`Cmd::try_execute`]) cover the common cases.
//!
//! ## Architecture
//!
//! - **`cmd`**: The [`Cmd`] descriptor and its execution conveniences.
//! - **`pipeline`**: The build/run engine and [`RunReport`].
//! - **`core`**: Shared infrastructure ([`PipersError`], [`Result`]).
//!
//! ## Examples
//!
//! Capture the output of a chain:
//!
//! ```rust
//! use pipers::Cmd;
//!
//! let out = Cmd::new("echo")
//!     .arg("pipers")
//!     .pipe_to(Cmd::with_args("tr", ["a-z", "A-Z"]))
//!     .output();
//! assert_eq!(out.as_deref(), Some("PIPERS\n"));
//! ```
//!
//! Inspect per-stage exit statuses; a failing stage is data, not an error:
//!
//! ```rust
//! use pipers::Cmd;
//!
//! let report = Cmd::new("true")
//!     .pipe_to(Cmd::new("false"))
//!     .execute(false)
//!     .expect("both stages should launch");
//! assert!(report.statuses[0].success());
//! assert!(!report.statuses[1].success());
//! ```

/// The chainable command descriptor and its execution conveniences.
pub mod cmd;
/// Core shared infrastructure: error types and the `Result` alias.
pub mod core;
/// The pipeline engine: building prepared stages and running them.
pub mod pipeline;

pub use crate::cmd::{Cmd, Stage};
pub use crate::core::error::{PipersError, Result};
pub use crate::pipeline::{Pipeline, RunReport};

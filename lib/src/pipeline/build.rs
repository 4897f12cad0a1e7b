//! # PipeRS Pipeline Builder (`pipeline/build.rs`)
//!
//! File: lib/src/pipeline/build.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Translates a [`Cmd`](crate::Cmd) descriptor into a [`Pipeline`]: one
//! prepared `std::process::Command` per stage, with every stream disposition
//! decided up front. Building is infallible and spawns nothing; all launch
//! work happens later in [`Pipeline::run`](crate::Pipeline::run).
//!
//! ## Stream Dispositions
//!
//! Decided per stage from its position and the capture flag:
//!
//! - **stdout**: piped for every stage except the tail, so it can feed the
//!   next stage. The tail's stdout is piped only when capture is on;
//!   otherwise it is inherited from the calling process.
//! - **stderr**: piped for every stage when capture is on (each stage gets
//!   its own private pipe); inherited otherwise.
//! - **stdin**: the head stage inherits the caller's stdin. Later stages
//!   receive the upstream stage's stdout, which can only be attached at
//!   launch time once that upstream process exists.

use crate::cmd::Cmd;
use std::process::{Command, Stdio};
use tracing::debug;

/// A built pipeline, ready to run.
///
/// Holds one prepared command per stage. Created by [`Pipeline::build`],
/// consumed by [`Pipeline::run`](crate::Pipeline::run). No process exists
/// while a value of this type is merely held.
pub struct Pipeline {
    pub(super) stages: Vec<PreparedStage>,
    pub(super) capture: bool,
}

/// One stage of a built pipeline: the configured command plus a rendered
/// label used in logs and error messages.
pub(super) struct PreparedStage {
    pub(super) label: String,
    pub(super) command: Command,
}

impl Pipeline {
    /// # Build Pipeline (`build`)
    ///
    /// Prepares every stage of `cmd` for launching. Each stage becomes a
    /// `std::process::Command` carrying the stage's program, arguments, and
    /// working directory, with stdout/stderr dispositions assigned from the
    /// stage's position and the `capture` flag.
    ///
    /// Building cannot fail: nonexistent programs or directories only
    /// surface when the pipeline is run.
    ///
    /// ## Arguments
    ///
    /// * `cmd` - The descriptor to prepare. Only borrowed; it stays reusable.
    /// * `capture` - Whether stage stderr and tail stdout should be collected
    ///   into the run's report instead of being inherited.
    pub fn build(cmd: &Cmd, capture: bool) -> Pipeline {
        let total = cmd.stage_count();
        let mut stages = Vec::with_capacity(total);

        for (idx, stage) in cmd.stages().iter().enumerate() {
            let is_tail = idx + 1 == total;

            let mut command = Command::new(&stage.program);
            command.args(&stage.args);
            command.current_dir(&stage.dir);

            // Interior stdout always feeds the next stage. Tail stdout is
            // only piped when it is being captured.
            if !is_tail || capture {
                command.stdout(Stdio::piped());
            }
            if capture {
                command.stderr(Stdio::piped());
            }

            stages.push(PreparedStage {
                label: stage.describe(),
                command,
            });
        }

        debug!(
            "Built pipeline with {} stage(s), capture={}",
            stages.len(),
            capture
        );
        Pipeline { stages, capture }
    }

    /// Returns the number of prepared stages.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns whether this pipeline will capture output when run.
    pub fn captures_output(&self) -> bool {
        self.capture
    }
}

// --- Unit Tests ---

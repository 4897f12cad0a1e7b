//! # PipeRS Pipeline Runner (`pipeline/run.rs`)
//!
//! File: lib/src/pipeline/run.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Executes a built [`Pipeline`] and produces a [`RunReport`]. All plumbing
//! happens on the calling thread with blocking waits; the only concurrency
//! is the child processes themselves running in parallel, scheduled by the
//! operating system.
//!
//! ## Workflow
//!
//! 1. Spawn each stage head to tail. Before spawning a non-head stage, take
//!    the upstream child's stdout handle and install it as this stage's
//!    stdin, so the kernel pipe connects the two processes directly.
//! 2. If any spawn fails, kill and reap the stages launched so far and
//!    return a launch error naming the failed stage. No statuses exist for
//!    such a run.
//! 3. Wait for every stage in pipeline order, collecting one `ExitStatus`
//!    per stage. Non-zero statuses are recorded, not treated as errors.
//! 4. Only after every stage has exited, drain the capture pipes: each
//!    stage's stderr, then the tail's stdout, strictly as UTF-8.
//!
//! ## Known Limitation
//!
//! Captured pipes are drained only after all stages exit. A stage that
//! writes more than the OS pipe buffer (typically 64 KiB) to a captured
//! stream before exiting will block on that write, and the wait in step 3
//! never returns. Capture is intended for modest, tool-sized output; run
//! large producers without capture and let their streams flow to the
//! caller's own stdout/stderr instead.

use super::build::{Pipeline, PreparedStage};
use crate::core::error::{PipersError, Result};
use anyhow::anyhow;
use std::io::Read;
use std::process::{Child, ChildStdout, ExitStatus};
use tracing::{debug, warn};

/// The outcome of one pipeline execution.
///
/// Exists only for runs where every stage launched and was waited on.
/// Unsuccessful exit statuses are ordinary data here; whether they matter is
/// the caller's decision.
#[derive(Debug)]
pub struct RunReport {
    /// One exit status per stage, in pipeline order (head first). Never
    /// empty.
    pub statuses: Vec<ExitStatus>,
    /// Captured stderr text per stage, in pipeline order. Empty strings for
    /// stages that wrote nothing; an empty vector when the run did not
    /// capture.
    pub stderr: Vec<String>,
    /// Captured stdout of the final stage. `Some("")` when capture was on
    /// but nothing was printed; `None` when the run did not capture.
    pub stdout: Option<String>,
}

impl RunReport {
    /// Returns true when every stage exited successfully.
    pub fn success(&self) -> bool {
        self.statuses.iter().all(ExitStatus::success)
    }

    /// Returns the exit status of the final stage, the one a shell would
    /// report for the whole pipeline.
    pub fn final_status(&self) -> Option<ExitStatus> {
        self.statuses.last().copied()
    }
}

/// A stage that has actually been spawned.
struct LaunchedStage {
    label: String,
    child: Child,
}

impl Pipeline {
    /// # Run Pipeline (`run`)
    ///
    /// Launches every prepared stage, waits for all of them, and drains any
    /// captured output. Consumes the pipeline; build again to run again.
    ///
    /// ## Returns
    ///
    /// * `Ok(report)` - Every stage launched and exited. The report holds
    ///   per-stage statuses (possibly unsuccessful) and captured text if
    ///   capture was enabled.
    /// * `Err(...)` - A stage failed to launch, a wait failed, or captured
    ///   output could not be read as UTF-8. Already-running stages are
    ///   killed and reaped before a launch error is returned.
    pub fn run(self) -> Result<RunReport> {
        let Pipeline { stages, capture } = self;

        // 1. Launch everything, wiring stage N's stdout into stage N+1's stdin.
        let mut launched = launch_all(stages)?;

        // 2. Wait in pipeline order. Statuses are data, not errors.
        let statuses = wait_all(&mut launched)?;

        // 3. With every stage exited, the capture pipes are at EOF; drain them.
        let (stderr, stdout) = if capture {
            drain_all(&mut launched)?
        } else {
            (Vec::new(), None)
        };

        Ok(RunReport {
            statuses,
            stderr,
            stdout,
        })
    }
}

/// Spawns every stage in order. On any spawn failure, tears down the stages
/// already running and reports which stage failed.
fn launch_all(stages: Vec<PreparedStage>) -> Result<Vec<LaunchedStage>> {
    let total = stages.len();
    let mut launched: Vec<LaunchedStage> = Vec::with_capacity(total);
    let mut upstream: Option<ChildStdout> = None;

    for (idx, stage) in stages.into_iter().enumerate() {
        let PreparedStage { label, mut command } = stage;

        // Connect this stage's stdin to the previous stage's stdout. The
        // head stage has no upstream and keeps the caller's stdin.
        if let Some(stdout) = upstream.take() {
            command.stdin(stdout);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(source) => {
                warn!(
                    "Stage '{}' failed to launch; terminating {} already-running stage(s)",
                    label,
                    launched.len()
                );
                abort(&mut launched);
                return Err(anyhow!(PipersError::Launch { stage: label, source }));
            }
        };
        debug!("Launched stage '{}' (pid {})", label, child.id());

        // Hand this stage's stdout to the next stage. The tail keeps its
        // stdout handle so it can be drained if capture is on.
        if idx + 1 < total {
            upstream = child.stdout.take();
        }

        launched.push(LaunchedStage { label, child });
    }

    Ok(launched)
}

/// Kills and reaps every launched stage. Used when a later stage fails to
/// spawn: the survivors must not be left running or as zombies.
fn abort(launched: &mut [LaunchedStage]) {
    for stage in launched.iter_mut() {
        if let Err(e) = stage.child.kill() {
            debug!("Stage '{}' was already gone when killed: {}", stage.label, e);
        }
        if let Err(e) = stage.child.wait() {
            debug!("Failed to reap stage '{}': {}", stage.label, e);
        }
    }
}

/// Waits for every stage in pipeline order, collecting exit statuses.
fn wait_all(launched: &mut [LaunchedStage]) -> Result<Vec<ExitStatus>> {
    let mut statuses = Vec::with_capacity(launched.len());
    for stage in launched.iter_mut() {
        let status = match stage.child.wait() {
            Ok(status) => status,
            Err(source) => {
                return Err(anyhow!(PipersError::Wait {
                    stage: stage.label.clone(),
                    source,
                }));
            }
        };
        debug!("Stage '{}' exited: {}", stage.label, status);
        statuses.push(status);
    }
    Ok(statuses)
}

/// Drains the capture pipes: every stage's stderr, then the tail's stdout.
/// Only called once all stages have exited, so every read runs to EOF
/// without blocking. Output must be valid UTF-8.
fn drain_all(launched: &mut [LaunchedStage]) -> Result<(Vec<String>, Option<String>)> {
    let mut stderr_texts = Vec::with_capacity(launched.len());
    for stage in launched.iter_mut() {
        let mut text = String::new();
        if let Some(mut pipe) = stage.child.stderr.take() {
            if let Err(source) = pipe.read_to_string(&mut text) {
                return Err(anyhow!(PipersError::Drain {
                    stream: "stderr",
                    stage: stage.label.clone(),
                    source,
                }));
            }
        }
        stderr_texts.push(text);
    }

    let mut stdout_text = String::new();
    if let Some(tail) = launched.last_mut() {
        if let Some(mut pipe) = tail.child.stdout.take() {
            if let Err(source) = pipe.read_to_string(&mut stdout_text) {
                return Err(anyhow!(PipersError::Drain {
                    stream: "stdout",
                    stage: tail.label.clone(),
                    source,
                }));
            }
        }
    }

    Ok((stderr_texts, Some(stdout_text)))
}

// --- Unit Tests ---

//! # PipeRS Command Descriptor (`cmd.rs`)
//!
//! File: lib/src/cmd.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/pipers
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Defines [`Cmd`], the value that describes *what* to run: one or more
//! pipeline stages, each an executable with arguments and a working
//! directory. A `Cmd` is pure data. Creating one, chaining it, or rendering
//! it never touches the operating system; no process starts until one of the
//! execution methods ([`Cmd::run`], [`Cmd::output`], [`Cmd::execute`],
//! [`Cmd::try_execute`]) is called.
//!
//! ## Architecture
//!
//! - **`Stage`**: A single command in the chain (program, arguments, cwd).
//! - **`Cmd`**: A non-empty list of stages. A freshly constructed `Cmd` has
//!   exactly one stage; [`Cmd::pipe_to`] appends the stages of another `Cmd`,
//!   so a chain of any length is always a flat list, never a nested
//!   structure. Builder methods consume and return the descriptor, and the
//!   type is `Clone`, so a descriptor can be stored and executed repeatedly.
//!
//! The actual process plumbing lives in the [`pipeline`](crate::pipeline)
//! module; the execution methods here are thin conveniences over it.
//!
//! ## Examples
//!
//! ```rust
//! use pipers::Cmd;
//!
//! // Describe a pipeline. Nothing runs yet.
//! let cmd = Cmd::new("ls")
//!     .arg("-l")
//!     .pipe_to(Cmd::with_args("grep", ["toml"]));
//! assert_eq!(cmd.describe(), "ls -l | grep toml");
//!
//! // Run it, capturing output. `execute` returns None if a stage
//! // fails to launch.
//! if let Some(report) = cmd.execute(true) {
//!     let _listing = report.stdout.unwrap_or_default();
//! }
//! ```

use crate::core::error::Result;
use crate::pipeline::{Pipeline, RunReport};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use tracing::warn;

/// A single stage of a pipeline: one program invocation.
///
/// Fields are public so callers (and the pipeline builder) can inspect a
/// descriptor, but stages are normally created through [`Cmd`] rather than
/// directly.
#[derive(Debug, Clone)]
pub struct Stage {
    /// The program to execute. Resolved against `PATH` at launch time if it
    /// is not an explicit path.
    pub program: String,
    /// Arguments passed to the program, in order.
    pub args: Vec<String>,
    /// Working directory the stage's process starts in. Defaults to `"."`,
    /// i.e. wherever the launching process happens to be.
    pub dir: PathBuf,
}

impl Stage {
    fn new(program: String) -> Self {
        Stage {
            program,
            args: Vec::new(),
            dir: PathBuf::from("."),
        }
    }

    /// Renders this stage as a shell-like string: the program followed by its
    /// arguments, space-joined. Spaces *inside* an argument are escaped with
    /// a backslash so the rendering stays unambiguous.
    pub fn describe(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(&arg.replace(' ', "\\ "));
        }
        rendered
    }
}

/// # Command Descriptor (`Cmd`)
///
/// An immutable-in-spirit description of a pipeline: one or more [`Stage`]s
/// executed left to right, each stage's standard output feeding the next
/// stage's standard input.
///
/// Builder methods take `self` by value and hand back the updated descriptor,
/// so definitions read as a single chain. Because `Cmd` is `Clone` and owns
/// all of its data, a descriptor can be built once and executed any number of
/// times; each execution is independent.
#[derive(Debug, Clone)]
pub struct Cmd {
    // Invariant: never empty. Both constructors create one stage, and
    // `pipe_to` only appends.
    stages: Vec<Stage>,
}

impl Cmd {
    /// # Create Descriptor (`new`)
    ///
    /// Creates a single-stage descriptor for `program` with no arguments,
    /// running in the current working directory.
    ///
    /// ## Arguments
    ///
    /// * `program` - The executable to run. Looked up on `PATH` at launch
    ///   time unless it is an explicit path.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use pipers::Cmd;
    ///
    /// let cmd = Cmd::new("ls");
    /// assert_eq!(cmd.describe(), "ls");
    /// ```
    pub fn new(program: impl Into<String>) -> Cmd {
        Cmd {
            stages: vec![Stage::new(program.into())],
        }
    }

    /// # Create Descriptor With Arguments (`with_args`)
    ///
    /// Creates a single-stage descriptor for `program` with the given
    /// arguments, equivalent to `Cmd::new(program)` followed by
    /// [`Cmd::args`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use pipers::Cmd;
    ///
    /// let cmd = Cmd::with_args("grep", ["-i", "error"]);
    /// assert_eq!(cmd.describe(), "grep -i error");
    /// ```
    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Cmd
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cmd::new(program).args(args)
    }

    /// Appends one argument to the most recently added stage.
    ///
    /// On a single-stage descriptor that is simply "the command"; after
    /// [`Cmd::pipe_to`] it refers to the stage that was piped in last.
    pub fn arg(mut self, arg: impl Into<String>) -> Cmd {
        if let Some(stage) = self.stages.last_mut() {
            stage.args.push(arg.into());
        }
        self
    }

    /// Appends several arguments to the most recently added stage.
    pub fn args<I, S>(mut self, args: I) -> Cmd
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(stage) = self.stages.last_mut() {
            stage.args.extend(args.into_iter().map(Into::into));
        }
        self
    }

    /// Sets the working directory of the most recently added stage.
    ///
    /// Each stage carries its own directory, so different stages of one
    /// pipeline may run in different places.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Cmd {
        if let Some(stage) = self.stages.last_mut() {
            stage.dir = dir.into();
        }
        self
    }

    /// # Chain Pipelines (`pipe_to`)
    ///
    /// Appends all stages of `next` after the stages of `self`, producing one
    /// flat pipeline. The standard output of the last stage of `self` will
    /// feed the standard input of the first stage of `next` when the pipeline
    /// runs.
    ///
    /// Because chaining is flat list concatenation, grouping does not matter:
    /// `a.pipe_to(b).pipe_to(c)` and `a.pipe_to(b.pipe_to(c))` describe the
    /// same pipeline.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use pipers::Cmd;
    ///
    /// let left = Cmd::new("ls").pipe_to(Cmd::new("sort")).pipe_to(Cmd::new("uniq"));
    /// let right = Cmd::new("ls").pipe_to(Cmd::new("sort").pipe_to(Cmd::new("uniq")));
    /// assert_eq!(left.describe(), right.describe());
    /// ```
    pub fn pipe_to(mut self, next: Cmd) -> Cmd {
        self.stages.extend(next.stages);
        self
    }

    /// # Render Pipeline (`describe`)
    ///
    /// Renders the whole pipeline as a shell-like string: each stage as
    /// program and space-joined arguments, stages joined with `" | "`.
    /// Spaces inside an argument are backslash-escaped. The rendering is
    /// for humans and logs; it is not re-parsed anywhere.
    pub fn describe(&self) -> String {
        self.stages
            .iter()
            .map(Stage::describe)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Returns the program of the first stage.
    pub fn program(&self) -> &str {
        // Index is safe: the stages list is never empty by construction.
        &self.stages[0].program
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the stages of the pipeline, head first.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    // --- Execution conveniences ---
    //
    // These build a `Pipeline` from the descriptor and run it. The descriptor
    // itself is only borrowed, so it stays reusable afterwards.

    /// # Run Pipeline (`run`)
    ///
    /// Runs the pipeline with stdout and stderr inherited from the calling
    /// process (output goes wherever the caller's does) and returns the exit
    /// status of the *final* stage, mirroring how a shell reports a
    /// pipeline's status.
    ///
    /// ## Returns
    ///
    /// * `Some(status)` - Every stage launched and was waited on; `status` is
    ///   the final stage's exit status (which may itself be unsuccessful).
    /// * `None` - Some stage failed to launch, so there is no status to
    ///   report. Details are logged; use [`Cmd::try_execute`] to get them as
    ///   an error value.
    pub fn run(&self) -> Option<ExitStatus> {
        self.execute(false)
            .and_then(|report| report.statuses.last().copied())
    }

    /// # Capture Pipeline Output (`output`)
    ///
    /// Runs the pipeline with capture enabled and returns the final stage's
    /// standard output as a string (empty if the stage printed nothing).
    ///
    /// Returns `None` if a stage failed to launch or captured output could
    /// not be read (e.g., it was not valid UTF-8). Exit statuses are ignored
    /// here; a pipeline that prints and then fails still yields its text.
    pub fn output(&self) -> Option<String> {
        self.execute(true).and_then(|report| report.stdout)
    }

    /// # Execute Pipeline (`execute`)
    ///
    /// Runs the pipeline and returns the full [`RunReport`]: one exit status
    /// per stage, in pipeline order, plus captured text when `capture` is
    /// true.
    ///
    /// ## Arguments
    ///
    /// * `capture` - When true, each stage's stderr and the final stage's
    ///   stdout are collected into the report instead of being inherited.
    ///
    /// ## Returns
    ///
    /// * `Some(report)` - The pipeline ran to completion (individual stages
    ///   may still have failed; inspect the statuses).
    /// * `None` - A stage failed to launch or captured output could not be
    ///   drained. The cause is logged at `warn` level and discarded; callers
    ///   that need it should use [`Cmd::try_execute`].
    pub fn execute(&self, capture: bool) -> Option<RunReport> {
        match self.try_execute(capture) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Pipeline '{}' did not produce a result: {:#}", self.describe(), e);
                None
            }
        }
    }

    /// # Execute Pipeline, Keeping Errors (`try_execute`)
    ///
    /// Like [`Cmd::execute`], but launch and drain failures come back as an
    /// error with context instead of being collapsed to `None`. A non-zero
    /// exit status is still *not* an error; it is data in the report.
    pub fn try_execute(&self, capture: bool) -> Result<RunReport> {
        Pipeline::build(self, capture).run()
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// --- Unit Tests ---

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The invocation record: one job's resolved launch plan and, once the
//! external executor has run it, its outcome.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use gantry_cmdline::TokenOutcome;

use crate::proc::ProcessRecord;
use crate::resolve::{find_executable, ResolveOptions};
use crate::snapshot::FileSnapshot;
use crate::usage::UsageInfo;

/// Raw-status sentinel for a job that could not be launched at all.
pub const LAUNCH_FAILED_STATUS: i32 = -127;

/// Whether a record holds a usable launch plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// No arguments at all; the record renders nothing.
    Unbuilt,
    /// Argument 0 resolved to an executable path.
    Valid,
    /// Resolution or the executability check failed.
    Invalid,
}

/// All argument text in one owned contiguous buffer, with one span per
/// argument indexing into it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ArgStore {
    text: String,
    spans: Vec<Range<usize>>,
}

impl ArgStore {
    /// Single-pass transfer from the token list: each word is appended to
    /// the buffer and its span recorded; the tokens are consumed.
    fn from_tokens(tokens: Vec<String>) -> Self {
        let total = tokens.iter().map(String::len).sum();
        let mut text = String::with_capacity(total);
        let mut spans = Vec::with_capacity(tokens.len());
        for token in tokens {
            let start = text.len();
            text.push_str(&token);
            spans.push(start..text.len());
        }
        Self { text, spans }
    }

    fn len(&self) -> usize {
        self.spans.len()
    }

    fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.text[span.clone()])
    }
}

/// Ownership origin of argument 0.
///
/// Argument 0 either still lives in the backing store like every other
/// argument, or was swapped for a separately owned resolved path. The
/// tag keeps the two origins apart so each is released exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProgramSlot {
    /// Argument 0 is the raw word in the backing store.
    Store,
    /// Argument 0 was replaced by an independently owned resolved path.
    Resolved(PathBuf),
}

/// One job's launch plan plus its post-execution annotations.
///
/// Built once from a token outcome, optionally decorated by the external
/// executor (timing, raw status, child pid, usage, descendants), then
/// rendered zero or more times by [`crate::report::write_report`].
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    args: ArgStore,
    program: ProgramSlot,
    validity: Validity,
    raw_status: i32,
    saved_errno: i32,
    failure_prefix: Option<String>,
    child_pid: Option<u32>,
    start: SystemTime,
    finish: SystemTime,
    executable: Option<FileSnapshot>,
    usage: UsageInfo,
    children: Vec<ProcessRecord>,
}

impl Default for InvocationRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationRecord {
    /// A fresh, unbuilt record.
    pub fn new() -> Self {
        Self {
            args: ArgStore::default(),
            program: ProgramSlot::Store,
            validity: Validity::Unbuilt,
            raw_status: 0,
            saved_errno: 0,
            failure_prefix: None,
            child_pid: None,
            start: SystemTime::UNIX_EPOCH,
            finish: SystemTime::UNIX_EPOCH,
            executable: None,
            usage: UsageInfo::default(),
            children: Vec::new(),
        }
    }

    /// Build a record from a shell-style command line.
    pub fn from_command_line(line: &str, options: &ResolveOptions) -> Self {
        Self::from_tokens(gantry_cmdline::tokenize(line), options)
    }

    /// Build a record from an already-split argument vector.
    pub fn from_arg_vector<I, S>(args: I, options: &ResolveOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_tokens(gantry_cmdline::from_arg_vector(args), options)
    }

    /// Build a record from a tokenizer outcome.
    ///
    /// Anything other than a usable status discards the token list and
    /// leaves the record unbuilt. A usable, non-empty list has argument 0
    /// resolved to an executable path; failure there marks the record
    /// invalid with the launch-failure sentinel status and the platform
    /// errno saved for the report. Either way the file named by argument 0
    /// (resolved or not) is snapshotted best-effort for the report.
    pub fn from_tokens(outcome: TokenOutcome, options: &ResolveOptions) -> Self {
        let mut record = Self::new();

        if !outcome.is_usable() {
            // Partial words from a failed parse are dropped wholesale.
            return record;
        }
        record.args = ArgStore::from_tokens(outcome.tokens);
        if record.args.is_empty() {
            return record;
        }

        let program = match record.args.get(0) {
            Some(word) => word.to_string(),
            None => return record,
        };
        match find_executable(&program, options) {
            Ok(path) => {
                record.program = ProgramSlot::Resolved(path);
                record.validity = Validity::Valid;
            }
            Err(err) => {
                tracing::debug!(program = %program, error = %err, "job is not launchable");
                record.raw_status = LAUNCH_FAILED_STATUS;
                record.saved_errno = err.errno();
                record.validity = Validity::Invalid;
            }
        }

        let attempted = record.program().map(Path::to_path_buf);
        if let Some(path) = attempted {
            record.executable = Some(FileSnapshot::capture(path));
        }
        record
    }

    /// Validity of the launch plan.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Whether argument 0 resolved to an executable path.
    pub fn is_launchable(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Number of argv-style arguments, program included.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Argument 0 as it currently stands: the resolved path once valid,
    /// otherwise the raw program word. `None` for an unbuilt record.
    pub fn program(&self) -> Option<&Path> {
        match &self.program {
            ProgramSlot::Resolved(path) => Some(path),
            ProgramSlot::Store => self.args.get(0).map(Path::new),
        }
    }

    /// The program word exactly as it appeared in the input.
    pub fn raw_program(&self) -> Option<&str> {
        self.args.get(0)
    }

    /// The parameters (arguments 1..N), in order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        (1..self.args.len()).filter_map(move |index| self.args.get(index))
    }

    /// Raw OS wait status, or the launch-failure sentinel.
    pub fn raw_status(&self) -> i32 {
        self.raw_status
    }

    /// Record the raw wait status collected by the executor.
    pub fn set_raw_status(&mut self, status: i32) {
        self.raw_status = status;
    }

    /// Platform error code captured when the launch itself failed.
    pub fn saved_errno(&self) -> i32 {
        self.saved_errno
    }

    /// Record the errno of a failed launch (e.g. a failed exec after fork).
    pub fn set_saved_errno(&mut self, errno: i32) {
        self.saved_errno = errno;
    }

    /// Free-form prefix prepended to the failure description in the report.
    pub fn failure_prefix(&self) -> Option<&str> {
        self.failure_prefix.as_deref()
    }

    /// Set the failure-description prefix.
    pub fn set_failure_prefix(&mut self, prefix: impl Into<String>) {
        self.failure_prefix = Some(prefix.into());
    }

    /// Pid of the started child, if the process actually started.
    pub fn child_pid(&self) -> Option<u32> {
        self.child_pid
    }

    /// Record the pid of the started child.
    pub fn set_child_pid(&mut self, pid: u32) {
        self.child_pid = Some(pid);
    }

    /// Start timestamp supplied by the executor.
    pub fn start(&self) -> SystemTime {
        self.start
    }

    /// Finish timestamp supplied by the executor.
    pub fn finish(&self) -> SystemTime {
        self.finish
    }

    /// Record the execution interval.
    pub fn set_interval(&mut self, start: SystemTime, finish: SystemTime) {
        self.start = start;
        self.finish = finish;
    }

    /// Stat snapshot of the file argument 0 named at build time.
    pub fn executable(&self) -> Option<&FileSnapshot> {
        self.executable.as_ref()
    }

    /// Resource usage supplied by the accounting collaborator.
    pub fn usage(&self) -> &UsageInfo {
        &self.usage
    }

    /// Record resource usage.
    pub fn set_usage(&mut self, usage: UsageInfo) {
        self.usage = usage;
    }

    /// Descendant processes observed by the tracking collaborator.
    pub fn children(&self) -> &[ProcessRecord] {
        &self.children
    }

    /// Record one observed descendant process.
    pub fn add_child(&mut self, child: ProcessRecord) {
        self.children.push(child);
    }

    /// Return the record to its unbuilt state, releasing the argument
    /// store, any resolved path, the snapshot, and the process tree.
    /// Safe to call repeatedly; a reset record renders nothing.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

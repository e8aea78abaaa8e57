// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of raw OS wait statuses into exit dispositions.

use nix::libc;
use nix::sys::signal::Signal;

/// The mutually exclusive ways a job can end, in report priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDisposition {
    /// The program never started; the saved errno tells why.
    LaunchFailure,
    /// Regular termination with an exit code.
    Exited {
        /// The numeric exit code.
        code: i32,
    },
    /// Terminated by a signal.
    Signaled {
        /// The terminating signal number.
        signal: i32,
        /// Whether a core file was produced.
        core_dumped: bool,
    },
    /// Suspended by job control, not terminated.
    Stopped {
        /// The stop signal number.
        signal: i32,
    },
    /// A platform encoding outside the three wait categories. The report
    /// renders this as an empty status element; the upstream semantics
    /// are unspecified and nothing is fabricated.
    Unknown,
}

impl ExitDisposition {
    /// Decode a raw wait status. Negative raw values are the launch
    /// failure sentinel and take priority over everything else.
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            return Self::LaunchFailure;
        }
        if libc::WIFEXITED(raw) {
            return Self::Exited { code: libc::WEXITSTATUS(raw) };
        }
        if libc::WIFSIGNALED(raw) {
            return Self::Signaled {
                signal: libc::WTERMSIG(raw),
                core_dumped: libc::WCOREDUMP(raw),
            };
        }
        if libc::WIFSTOPPED(raw) {
            return Self::Stopped { signal: libc::WSTOPSIG(raw) };
        }
        Self::Unknown
    }
}

/// Human-readable signal name (`SIGTERM`), falling back to the bare
/// number for values the platform does not know.
pub fn signal_name(signal: i32) -> String {
    match Signal::try_from(signal) {
        Ok(sig) => sig.as_str().to_string(),
        Err(_) => format!("signal {signal}"),
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource usage as reported by the external accounting collaborator.

use std::io::{self, Write};

/// rusage-shaped scalars for one finished job.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsageInfo {
    /// User CPU time, seconds.
    pub utime: f64,
    /// System CPU time, seconds.
    pub stime: f64,
    /// Peak resident set size, kilobytes.
    pub maxrss: u64,
    /// Minor page faults.
    pub minflt: u64,
    /// Major page faults.
    pub majflt: u64,
    /// Voluntary context switches.
    pub nvcsw: u64,
    /// Involuntary context switches.
    pub nivcsw: u64,
}

impl UsageInfo {
    /// Render as a single self-closing `<usage/>` element.
    pub fn write_xml<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        writeln!(
            out,
            "{:indent$}<usage utime=\"{:.3}\" stime=\"{:.3}\" maxrss=\"{}\" \
             minflt=\"{}\" majflt=\"{}\" nvcsw=\"{}\" nivcsw=\"{}\"/>",
            "",
            self.utime,
            self.stime,
            self.maxrss,
            self.minflt,
            self.majflt,
            self.nvcsw,
            self.nivcsw
        )
    }
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;

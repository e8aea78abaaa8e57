// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Descendant processes observed by the external tracking collaborator.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::xml::escape;

/// One descendant of the launched process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// Process id.
    pub pid: u32,
    /// Parent process id.
    pub ppid: u32,
    /// Executable the descendant ran.
    pub exe: PathBuf,
}

impl ProcessRecord {
    /// Render as a single self-closing `<proc/>` element.
    pub fn write_xml<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        writeln!(
            out,
            "{:indent$}<proc ppid=\"{}\" pid=\"{}\" exe=\"{}\"/>",
            "",
            self.ppid,
            self.pid,
            escape(&self.exe.display().to_string())
        )
    }
}

#[cfg(test)]
#[path = "proc_tests.rs"]
mod tests;

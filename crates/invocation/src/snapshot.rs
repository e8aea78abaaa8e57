// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort stat snapshot of the program file.

use std::fs::{self, Metadata};
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use crate::xml::escape;

/// A stat snapshot of the file a path named at capture time.
///
/// Capture never fails the caller: a missing or unreadable path is
/// recorded as the captured errno with no metadata, and the report
/// renders whatever was captured.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    path: PathBuf,
    meta: Option<Metadata>,
    errno: i32,
}

impl FileSnapshot {
    /// Snapshot `path` as it stands right now.
    pub fn capture(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match fs::metadata(&path) {
            Ok(meta) => Self { path, meta: Some(meta), errno: 0 },
            Err(err) => {
                let errno = err.raw_os_error().unwrap_or(0);
                Self { path, meta: None, errno }
            }
        }
    }

    /// The path that was snapshotted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The captured metadata, if the stat succeeded.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.meta.as_ref()
    }

    /// The stat errno, zero on success.
    pub fn errno(&self) -> i32 {
        self.errno
    }

    /// Render as a `<tag>` element: the file name, plus mode/size/owner
    /// when the stat succeeded.
    pub fn write_xml<W: Write>(&self, out: &mut W, indent: usize, tag: &str) -> io::Result<()> {
        writeln!(out, "{:indent$}<{tag} error=\"{}\">", "", self.errno)?;
        let inner = indent + 2;
        writeln!(
            out,
            "{:inner$}<file name=\"{}\"/>",
            "",
            escape(&self.path.display().to_string())
        )?;
        if let Some(meta) = &self.meta {
            writeln!(
                out,
                "{:inner$}<statinfo mode=\"0{:o}\" size=\"{}\" uid=\"{}\" gid=\"{}\"/>",
                "",
                meta.mode() & 0o7777,
                meta.len(),
                meta.uid(),
                meta.gid()
            )?;
        }
        writeln!(out, "{:indent$}</{tag}>", "")
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;

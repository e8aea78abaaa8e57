// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for executable path resolution.

use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Errors that can occur while resolving a program name to a launchable
/// path.
///
/// Every variant maps to a platform error code via [`ResolveError::errno`]
/// so a failed resolution can be carried in an invocation record and
/// rendered in its failure block.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The program name was empty.
    #[error("empty program name")]
    EmptyProgram,

    /// No existing regular file matched the name, directly or on the
    /// search path.
    #[error("program '{name}' not found")]
    NotFound {
        /// The name as given.
        name: String,
    },

    /// The name was relative, not in the working directory, and `PATH`
    /// is unset.
    #[error("PATH not set while resolving '{name}'")]
    SearchPathUnset {
        /// The name as given.
        name: String,
    },

    /// The resolved file exists but is not readable and executable.
    #[error("'{}' is not executable: {errno}", path.display())]
    NotExecutable {
        /// The resolved candidate path.
        path: PathBuf,
        /// The access(2) denial.
        errno: Errno,
    },

    /// Permission repair could not stat the file.
    #[error("unable to stat '{}': {source}", path.display())]
    RepairStat {
        /// The resolved candidate path.
        path: PathBuf,
        /// Underlying stat failure.
        source: std::io::Error,
    },

    /// Permission repair could not widen the file's mode.
    #[error("unable to set executable permissions on '{}': {source}", path.display())]
    RepairChmod {
        /// The resolved candidate path.
        path: PathBuf,
        /// Underlying chmod failure.
        source: std::io::Error,
    },
}

impl ResolveError {
    /// The platform error code this failure saves into the record.
    pub fn errno(&self) -> i32 {
        match self {
            ResolveError::EmptyProgram
            | ResolveError::NotFound { .. }
            | ResolveError::SearchPathUnset { .. } => Errno::ENOENT as i32,
            ResolveError::NotExecutable { errno, .. } => *errno as i32,
            ResolveError::RepairStat { source, .. }
            | ResolveError::RepairChmod { source, .. } => {
                source.raw_os_error().unwrap_or(Errno::EACCES as i32)
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

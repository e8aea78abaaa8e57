// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executable path resolution.
//!
//! Turns a bare program name into a concrete filesystem path: absolute
//! paths are taken as-is, relative names are tried against the working
//! directory first and then against each `PATH` entry in order. A found
//! path must additionally pass a read+execute access check; with repair
//! enabled an inaccessible file gets its permissions widened once before
//! the check is retried.

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};

use crate::error::ResolveError;

/// Knobs for path resolution, threaded through the invocation builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Widen owner/group/other read+execute bits (once) when a resolved
    /// program fails the access check. Off by default.
    pub repair_permissions: bool,
}

/// Resolve `name` to an existing, executable regular file.
pub fn find_executable(name: &str, options: &ResolveOptions) -> Result<PathBuf, ResolveError> {
    if name.is_empty() {
        return Err(ResolveError::EmptyProgram);
    }
    let candidate = locate(name)?;
    check_executable(&candidate, options)?;
    Ok(candidate)
}

/// Find an existing regular file for `name` without checking access.
fn locate(name: &str) -> Result<PathBuf, ResolveError> {
    let direct = Path::new(name);

    // Absolute paths are never searched for.
    if direct.is_absolute() {
        if is_regular_file(direct) {
            return Ok(direct.to_path_buf());
        }
        return Err(ResolveError::NotFound { name: name.to_string() });
    }

    // Literal relative path against the working directory.
    if is_regular_file(direct) {
        return Ok(direct.to_path_buf());
    }

    let Some(search) = env::var_os("PATH") else {
        tracing::warn!(program = name, "PATH not set");
        return Err(ResolveError::SearchPathUnset { name: name.to_string() });
    };

    for dir in env::split_paths(&search) {
        let candidate = dir.join(name);
        if is_regular_file(&candidate) {
            return Ok(candidate);
        }
    }

    Err(ResolveError::NotFound { name: name.to_string() })
}

/// Verify read+execute access for the effective identity, repairing the
/// mode first if the options ask for it.
fn check_executable(path: &Path, options: &ResolveOptions) -> Result<(), ResolveError> {
    match access(path, AccessFlags::R_OK | AccessFlags::X_OK) {
        Ok(()) => Ok(()),
        Err(_) if options.repair_permissions => repair(path),
        Err(errno) => Err(ResolveError::NotExecutable { path: path.to_path_buf(), errno }),
    }
}

/// Widen owner/group/other read+execute bits and re-check. At most one
/// attempt; any stat or chmod failure aborts resolution.
fn repair(path: &Path) -> Result<(), ResolveError> {
    let meta = fs::metadata(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "unable to stat executable");
        ResolveError::RepairStat { path: path.to_path_buf(), source }
    })?;

    let mut perms = meta.permissions();
    perms.set_mode(perms.mode() | 0o555);
    fs::set_permissions(path, perms).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "unable to set executable permissions");
        ResolveError::RepairChmod { path: path.to_path_buf(), source }
    })?;

    access(path, AccessFlags::R_OK | AccessFlags::X_OK)
        .map_err(|errno| ResolveError::NotExecutable { path: path.to_path_buf(), errno })
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution behavior seen through the builder: search-path lookups and
//! permission repair.

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use gantry_invocation::{InvocationRecord, ResolveOptions, Validity};
use serial_test::serial;

fn write_script(dir: &Path, name: &str, mode: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(mode);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
#[serial]
fn bare_name_resolves_through_the_search_path() {
    let temp = tempfile::tempdir().unwrap();
    let expected = write_script(temp.path(), "gantry-spec-tool", 0o755);

    let saved = env::var_os("PATH");
    let joined = match &saved {
        Some(old) => {
            let mut dirs = vec![temp.path().to_path_buf()];
            dirs.extend(env::split_paths(old));
            env::join_paths(dirs).unwrap()
        }
        None => temp.path().as_os_str().to_os_string(),
    };
    env::set_var("PATH", joined);

    let record = InvocationRecord::from_command_line(
        "gantry-spec-tool --verbose",
        &ResolveOptions::default(),
    );

    match saved {
        Some(old) => env::set_var("PATH", old),
        None => env::remove_var("PATH"),
    }

    assert_eq!(record.validity(), Validity::Valid);
    assert_eq!(record.program(), Some(expected.as_path()));
    assert_eq!(record.parameters().collect::<Vec<_>>(), vec!["--verbose"]);
}

#[test]
fn repair_mode_recovers_an_unexecutable_script() {
    let temp = tempfile::tempdir().unwrap();
    let script = write_script(temp.path(), "locked-tool", 0o600);
    let line = script.to_str().unwrap().to_string();

    let plain = InvocationRecord::from_command_line(&line, &ResolveOptions::default());
    assert_eq!(plain.validity(), Validity::Invalid);

    let repaired = InvocationRecord::from_command_line(
        &line,
        &ResolveOptions { repair_permissions: true },
    );
    assert_eq!(repaired.validity(), Validity::Valid);

    let mode = fs::metadata(&script).unwrap().permissions().mode();
    assert_eq!(mode & 0o555, 0o555);
}

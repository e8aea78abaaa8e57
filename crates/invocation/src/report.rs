// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The invocation reporter: renders a built record plus its
//! post-execution annotations as one XML element.
//!
//! Pure function of the record's current state — no mutation, safe to
//! call any number of times. An unbuilt record renders nothing at all;
//! an invalid one renders a failed launch.

use std::io::{self, Write};

use nix::errno::Errno;

use crate::record::{InvocationRecord, Validity};
use crate::status::{signal_name, ExitDisposition};
use crate::time_fmt::{interval_secs, iso_utc};
use crate::xml::escape;

/// Write the record as a `<tag>` element at the given indentation depth
/// (spaces).
pub fn write_report<W: Write>(
    out: &mut W,
    indent: usize,
    tag: &str,
    record: &InvocationRecord,
) -> io::Result<()> {
    if record.validity() == Validity::Unbuilt {
        return Ok(());
    }

    write!(out, "{:indent$}<{tag} start=\"{}\"", "", iso_utc(record.start()))?;
    write!(out, " duration=\"{:.3}\"", interval_secs(record.start(), record.finish()))?;
    if let Some(pid) = record.child_pid() {
        write!(out, " pid=\"{pid}\"")?;
    }
    writeln!(out, ">")?;

    record.usage().write_xml(out, indent + 2)?;

    write_status(out, indent + 2, record)?;

    if let Some(snapshot) = record.executable() {
        snapshot.write_xml(out, indent + 2, "statcall")?;
    }

    write_argument_vector(out, indent + 2, record)?;

    for child in record.children() {
        child.write_xml(out, indent + 2)?;
    }

    writeln!(out, "{:indent$}</{tag}>", "")
}

fn write_status<W: Write>(out: &mut W, indent: usize, record: &InvocationRecord) -> io::Result<()> {
    let raw = record.raw_status();
    write!(out, "{:indent$}<status raw=\"{raw}\">", "")?;
    match ExitDisposition::from_raw(raw) {
        ExitDisposition::LaunchFailure => {
            let errno = record.saved_errno();
            let prefix = record.failure_prefix().unwrap_or("");
            write!(
                out,
                "<failure error=\"{errno}\">{}{}</failure>",
                escape(prefix),
                escape(Errno::from_raw(errno).desc())
            )?;
        }
        ExitDisposition::Exited { code } => {
            write!(out, "<regular exitcode=\"{code}\"/>")?;
        }
        ExitDisposition::Signaled { signal, core_dumped } => {
            write!(
                out,
                "<signalled signal=\"{signal}\" corefile=\"{core_dumped}\">{}</signalled>",
                escape(&signal_name(signal))
            )?;
        }
        ExitDisposition::Stopped { signal } => {
            write!(
                out,
                "<suspended signal=\"{signal}\">{}</suspended>",
                escape(&signal_name(signal))
            )?;
        }
        // Encodings outside the three wait categories stay empty.
        ExitDisposition::Unknown => {}
    }
    writeln!(out, "</status>")
}

fn write_argument_vector<W: Write>(
    out: &mut W,
    indent: usize,
    record: &InvocationRecord,
) -> io::Result<()> {
    write!(out, "{:indent$}<argument-vector", "")?;
    if record.arg_count() == 1 {
        return writeln!(out, "/>");
    }
    writeln!(out, ">")?;
    let inner = indent + 2;
    for (index, arg) in record.parameters().enumerate() {
        writeln!(out, "{:inner$}<arg nr=\"{}\">{}</arg>", "", index + 1, escape(arg))?;
    }
    writeln!(out, "{:indent$}</argument-vector>", "")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

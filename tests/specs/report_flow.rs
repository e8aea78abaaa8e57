// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build an invocation from raw text and render its outcome report.

use std::time::{Duration, UNIX_EPOCH};

use gantry_invocation::{write_report, InvocationRecord, ResolveOptions, UsageInfo, Validity};
use similar_asserts::assert_eq;

fn render(record: &InvocationRecord) -> String {
    let mut out = Vec::new();
    write_report(&mut out, 0, "mainjob", record).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn echo_round_trip() {
    let outcome = gantry_cmdline::tokenize("/bin/echo 'hi there'");
    assert!(outcome.is_usable());

    let mut record =
        gantry_invocation::InvocationRecord::from_tokens(outcome, &ResolveOptions::default());
    assert_eq!(record.validity(), Validity::Valid);
    assert_eq!(record.arg_count(), 2);
    assert_eq!(record.program().unwrap().to_str(), Some("/bin/echo"));

    // Decorations an executor would add after running the job.
    record.set_raw_status(0);
    record.set_child_pid(1234);
    record.set_interval(UNIX_EPOCH, UNIX_EPOCH + Duration::from_millis(42));
    record.set_usage(UsageInfo { utime: 0.01, ..UsageInfo::default() });

    let rendered = render(&record);
    assert!(rendered.contains(" pid=\"1234\">"));
    assert!(rendered.contains("<regular exitcode=\"0\"/>"));
    assert!(rendered.contains("<arg nr=\"1\">hi there</arg>"));
    assert!(rendered.contains("utime=\"0.010\""));
}

#[test]
fn garbled_command_line_produces_no_report_at_all() {
    let record =
        InvocationRecord::from_command_line("/bin/echo 'unterminated", &ResolveOptions::default());
    assert_eq!(record.validity(), Validity::Unbuilt);
    assert_eq!(render(&record), "");
}

#[test]
fn unresolvable_job_renders_the_exact_failure_document() {
    let mut record = InvocationRecord::from_command_line(
        "/no/such/dir/gantry-job --flag 'two words'",
        &ResolveOptions::default(),
    );
    assert_eq!(record.validity(), Validity::Invalid);
    record.set_interval(UNIX_EPOCH, UNIX_EPOCH + Duration::from_millis(1_500));

    let expected = "\
<mainjob start=\"1970-01-01T00:00:00.000Z\" duration=\"1.500\">
  <usage utime=\"0.000\" stime=\"0.000\" maxrss=\"0\" minflt=\"0\" majflt=\"0\" nvcsw=\"0\" nivcsw=\"0\"/>
  <status raw=\"-127\"><failure error=\"2\">No such file or directory</failure></status>
  <statcall error=\"2\">
    <file name=\"/no/such/dir/gantry-job\"/>
  </statcall>
  <argument-vector>
    <arg nr=\"1\">--flag</arg>
    <arg nr=\"2\">two words</arg>
  </argument-vector>
</mainjob>
";
    assert_eq!(render(&record), expected);
}

#[test]
fn reports_can_be_nested_by_indentation() {
    let mut record =
        InvocationRecord::from_command_line("/bin/echo ok", &ResolveOptions::default());
    record.set_raw_status(0);

    let mut out = Vec::new();
    write_report(&mut out, 4, "cleanup", &record).unwrap();
    let rendered = String::from_utf8(out).unwrap();

    assert!(rendered.starts_with("    <cleanup start="));
    assert!(rendered.ends_with("    </cleanup>\n"));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gantry-invocation: launch descriptors for jobs and their outcome reports.
//!
//! The boundary between a job request (untyped text) and a launchable
//! process (resolved path + argument vector + validity), and between a
//! finished process (raw wait status) and a structured XML record of what
//! happened. Executing the process, accounting its resource usage, and
//! tracking its descendants belong to external collaborators; this crate
//! only builds the descriptor and renders the report.

pub mod error;
pub mod proc;
pub mod record;
pub mod report;
pub mod resolve;
pub mod snapshot;
pub mod status;
pub mod time_fmt;
pub mod usage;
pub mod xml;

pub use error::ResolveError;
pub use proc::ProcessRecord;
pub use record::{InvocationRecord, Validity, LAUNCH_FAILED_STATUS};
pub use report::write_report;
pub use resolve::{find_executable, ResolveOptions};
pub use snapshot::FileSnapshot;
pub use status::{signal_name, ExitDisposition};
pub use usage::UsageInfo;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp and interval formatting for the report.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2026-08-25T14:03:07.250Z`.
pub fn iso_utc(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Seconds from start to finish, signed: negative when finish precedes
/// start.
pub fn interval_secs(start: SystemTime, finish: SystemTime) -> f64 {
    match finish.duration_since(start) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(inverted) => -inverted.duration().as_secs_f64(),
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gantry-cmdline: shell-style command-line tokenization for job input.
//!
//! Splits raw job text into an ordered list of argument words plus a
//! parse status. Only [`ParseStatus::Usable`] outcomes are suitable for
//! building an invocation; every other status means the word list is
//! partial and must be discarded by the consumer.

mod error;
mod tokenize;

pub use error::TokenizeError;
pub use tokenize::{from_arg_vector, tokenize, ParseStatus, TokenOutcome};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for command-line tokenization.

use thiserror::Error;

/// Errors that can occur while tokenizing a command line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// Unterminated single quote.
    #[error("unterminated single quote at byte {at}")]
    UnterminatedSingleQuote {
        /// Byte offset of the opening quote.
        at: usize,
    },

    /// Unterminated double quote.
    #[error("unterminated double quote at byte {at}")]
    UnterminatedDoubleQuote {
        /// Byte offset of the opening quote.
        at: usize,
    },

    /// Backslash at end of input with nothing to escape.
    #[error("trailing backslash at byte {at}")]
    TrailingEscape {
        /// Byte offset of the backslash.
        at: usize,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

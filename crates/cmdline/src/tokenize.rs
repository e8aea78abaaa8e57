// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer for shell-style job command lines.
//!
//! Quoting rules: single quotes are fully literal; double quotes honor
//! backslash escapes for `\`, `"`, `$` and backtick; a backslash outside
//! quotes escapes the next character; unquoted whitespace separates words.
//! There is no variable expansion or substitution here — words are passed
//! through byte-for-byte.

use crate::error::TokenizeError;

/// Outcome of a tokenization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    /// The input parsed cleanly; the word list is complete and usable.
    Usable,
    /// Tokenization stopped mid-stream; the word list is partial.
    Failed(TokenizeError),
}

impl ParseStatus {
    /// Whether an invocation may be built from the accompanying words.
    pub fn is_usable(&self) -> bool {
        matches!(self, ParseStatus::Usable)
    }
}

/// An ordered word list plus the status it was produced under.
///
/// A `Failed` status still carries the words collected up to the point of
/// failure (including a partial final word) so callers can report them,
/// but consumers must not build an invocation from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOutcome {
    /// The words, in input order.
    pub tokens: Vec<String>,
    /// Whether the words are safe to use.
    pub status: ParseStatus,
}

impl TokenOutcome {
    /// Whether an invocation may be built from these tokens.
    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }
}

/// Wrap an argument vector that needs no splitting.
///
/// Mirrors the command-line entry point for callers that already hold
/// discrete arguments (e.g. from their own `main` argv). Always usable.
pub fn from_arg_vector<I, S>(args: I) -> TokenOutcome
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TokenOutcome {
        tokens: args.into_iter().map(Into::into).collect(),
        status: ParseStatus::Usable,
    }
}

/// Split a command line into words.
pub fn tokenize(line: &str) -> TokenOutcome {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    // Distinguishes "no word open" from an open-but-empty word so that
    // quoted empty strings ('' or "") survive as arguments.
    let mut in_word = false;
    let mut chars = line.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                let mut closed = false;
                for (_, qc) in chars.by_ref() {
                    if qc == '\'' {
                        closed = true;
                        break;
                    }
                    current.push(qc);
                }
                if !closed {
                    return fail(
                        tokens,
                        current,
                        in_word,
                        TokenizeError::UnterminatedSingleQuote { at: pos },
                    );
                }
            }
            '"' => {
                in_word = true;
                let mut closed = false;
                while let Some((esc_pos, qc)) = chars.next() {
                    match qc {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.peek().map(|&(_, c)| c) {
                            Some(c @ ('\\' | '"' | '$' | '`')) => {
                                current.push(c);
                                chars.next();
                            }
                            Some(_) => current.push('\\'),
                            None => {
                                return fail(
                                    tokens,
                                    current,
                                    in_word,
                                    TokenizeError::TrailingEscape { at: esc_pos },
                                );
                            }
                        },
                        _ => current.push(qc),
                    }
                }
                if !closed {
                    return fail(
                        tokens,
                        current,
                        in_word,
                        TokenizeError::UnterminatedDoubleQuote { at: pos },
                    );
                }
            }
            '\\' => match chars.next() {
                Some((_, next)) => {
                    current.push(next);
                    in_word = true;
                }
                None => {
                    return fail(
                        tokens,
                        current,
                        in_word,
                        TokenizeError::TrailingEscape { at: pos },
                    );
                }
            },
            _ => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if in_word {
        tokens.push(current);
    }
    TokenOutcome { tokens, status: ParseStatus::Usable }
}

fn fail(
    mut tokens: Vec<String>,
    current: String,
    in_word: bool,
    err: TokenizeError,
) -> TokenOutcome {
    if in_word {
        tokens.push(current);
    }
    TokenOutcome { tokens, status: ParseStatus::Failed(err) }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Errors raised while building or installing tokenizers.

use thiserror::Error;

/// The result of building or registering tokenizers.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates that tokenizers could not be built or installed.
///
/// A tokenizer declining to match text is _not_ an error; see
/// [`InlineTokenizer::tokenize()`](crate::tokenizer::InlineTokenizer::tokenize).
#[derive(Debug, Error)]
pub enum Error {
    /// The registry has no tokenizer with the given name, so new tokenizers
    /// cannot be positioned relative to it.
    #[error("tokenizer not found in registry: {0}")]
    MissingTokenizer(String),

    /// Registration options name the same tokenizer more than once.
    #[error("invalid registration options: {0}")]
    InvalidOptions(String),

    /// A tag pattern could not be compiled.
    #[error("could not compile tag pattern: {0}")]
    Regex(#[from] regex::Error),

    /// A tag pattern compiled, but is not usable as a tag pattern.
    #[error("invalid tag pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,

        /// Why the pattern was rejected.
        reason: &'static str,
    },
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Inline tokenizers for JSDoc tags.
//!
//! A host Markdown parser walks through a paragraph's text and, at each
//! position, asks its inline tokenizers in turn whether they recognize the
//! text starting there. A tokenizer that recognizes something hands the
//! matched text and the node it produced back to the host, which advances
//! past the matched text. The host uses each tokenizer's locator to skip
//! ahead to positions where the tokenizer could possibly match.

use crate::error::{Error, Result};
use crate::node::{Node, TagKind};
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{@link\s+(.+?)(?:[\s|](.*?))?\}").expect("invalid link pattern")
});

static TUTORIAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{@tutorial\s+(.+?)(?:[\s|](.*?))?\}").expect("invalid tutorial pattern")
});

/// Accepts text recognized by a tokenizer.
///
/// This is implemented by the host parser, which consumes `subvalue` from
/// its input and inserts `node` into the tree it is building. It is
/// implemented for any `FnMut(&str, Node)`, so a closure may be used.
pub trait Eat {
    /// Consume `subvalue` and add `node` to the tree.
    fn eat(&mut self, subvalue: &str, node: Node);
}

impl<F> Eat for F
where
    F: FnMut(&str, Node),
{
    fn eat(&mut self, subvalue: &str, node: Node) {
        self(subvalue, node)
    }
}

/// Recognizes a span of inline Markdown.
pub trait InlineTokenizer {
    /// Attempts to recognize the start of `value`, which is the text from the
    /// host parser's current position to the end of the input.
    ///
    /// On a match, `eat` is called exactly once with the matched text and
    /// the resulting node, and the length of the matched text, in bytes,
    /// is returned. Otherwise, `eat` is not called and `None` is returned;
    /// the host should try its next tokenizer.
    fn tokenize(&self, eat: &mut dyn Eat, value: &str) -> Option<usize>;

    /// Returns the byte index of the earliest position at or after
    /// `from_index` where this tokenizer could match, or `None` if it
    /// cannot match anywhere in the rest of `value`.
    fn locate(&self, value: &str, from_index: usize) -> Option<usize>;

    /// True if the host must not run this tokenizer inside the children of
    /// a link.
    fn not_in_link(&self) -> bool {
        false
    }
}

/// Tokenizes JSDoc inline tags such as `{@link target|title}`.
///
/// Tag patterns must be anchored to the start of the text and have
/// exactly two capture groups: the tag's target, and an optional title.
/// When the title is absent or empty, the target is used as the tag's
/// display text.
#[derive(Clone, Debug)]
pub struct TagTokenizer {
    kind: TagKind,
    pattern: Regex,
}

impl TagTokenizer {
    /// Creates a new tokenizer for tags of the given kind.
    ///
    /// Returns an [`Error::InvalidPattern`] if `pattern` is not anchored
    /// with `^` or does not have exactly two capture groups.
    pub fn new(kind: TagKind, pattern: Regex) -> Result<Self> {
        if !pattern.as_str().starts_with('^') {
            return Err(Self::invalid(&pattern, "pattern must be anchored with ^"));
        }
        // captures_len() counts the implicit group for the whole match
        if pattern.captures_len() != 3 {
            return Err(Self::invalid(
                &pattern,
                "pattern must have exactly two capture groups",
            ));
        }
        Ok(Self { kind, pattern })
    }

    /// Compiles `pattern` and creates a new tokenizer for tags of the
    /// given kind.
    ///
    /// Returns an [`Error::Regex`] if `pattern` does not compile, or an
    /// [`Error::InvalidPattern`] if it is not a valid tag pattern.
    pub fn from_pattern(kind: TagKind, pattern: &str) -> Result<Self> {
        Self::new(kind, Regex::new(pattern)?)
    }

    /// Creates a tokenizer for `{@link}` tags.
    pub fn link() -> Self {
        Self {
            kind: TagKind::Link,
            pattern: LINK_PATTERN.clone(),
        }
    }

    /// Creates a tokenizer for `{@tutorial}` tags.
    pub fn tutorial() -> Self {
        Self {
            kind: TagKind::Tutorial,
            pattern: TUTORIAL_PATTERN.clone(),
        }
    }

    /// The kind of tag recognized by this tokenizer.
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    fn invalid(pattern: &Regex, reason: &'static str) -> Error {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        }
    }
}

impl InlineTokenizer for TagTokenizer {
    fn tokenize(&self, eat: &mut dyn Eat, value: &str) -> Option<usize> {
        let captures = self.pattern.captures(value)?;
        let whole = captures.get(0)?;
        // an alternation can be anchored in only one of its branches
        if whole.start() != 0 {
            trace!("{} tag pattern matched past the start of {value:?}", self.kind);
            return None;
        }
        let subvalue = whole.as_str();
        let url = captures.get(1)?.as_str();
        let text = captures
            .get(2)
            .map(|title| title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or(url);

        trace!("{} tag matched {subvalue:?}", self.kind);
        eat.eat(subvalue, Node::tag(self.kind, url, text));
        Some(subvalue.len())
    }

    fn locate(&self, value: &str, from_index: usize) -> Option<usize> {
        let index = value
            .get(from_index..)?
            .find(self.kind.marker())
            .map(|i| from_index + i);
        trace!("located {} tag at {index:?} from {from_index}", self.kind);
        index
    }

    fn not_in_link(&self) -> bool {
        true
    }
}

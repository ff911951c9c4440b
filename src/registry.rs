// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Installs the JSDoc tag tokenizers into a host parser.
//!
//! A host parser keeps its inline tokenizers in a [`Registry`]: a table of
//! tokenizers by name, plus the order in which the host tries them at each
//! position. The last tokenizer tried is normally a catch-all that consumes
//! plain text, so [`register()`] inserts the tag tokenizers immediately
//! before it; anything after the catch-all would never run.

use crate::error::{Error, Result};
use crate::tokenizer::{InlineTokenizer, TagTokenizer};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

/// Name of the host's catch-all plain text tokenizer.
pub const INLINE_TEXT: &str = "inlineText";

/// Default name of the `{@link}` tokenizer.
pub const TOKENIZE_LINK: &str = "tokenizeLink";

/// Default name of the `{@tutorial}` tokenizer.
pub const TOKENIZE_TUTORIAL: &str = "tokenizeTutorial";

/// A host parser's inline tokenizers, and the order in which they are tried.
#[derive(Default)]
pub struct Registry {
    tokenizers: HashMap<String, Box<dyn InlineTokenizer>>,
    methods: Vec<String>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registry {{ methods = {:?} }}", self.methods)
    }
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tokenizer to the registry under `name` and tries it after
    /// every tokenizer already in the registry.
    ///
    /// If a tokenizer is already registered under `name`, it is replaced,
    /// and keeps its place in the order.
    pub fn with_tokenizer(
        mut self,
        name: impl Into<String>,
        tokenizer: impl InlineTokenizer + 'static,
    ) -> Self {
        let name = name.into();
        if !self.methods.contains(&name) {
            self.methods.push(name.clone());
        }
        self.insert(name, tokenizer);
        self
    }

    /// Adds a tokenizer to the registry under `name` without changing the
    /// order in which tokenizers are tried.
    ///
    /// Returns the tokenizer previously registered under `name`, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        tokenizer: impl InlineTokenizer + 'static,
    ) -> Option<Box<dyn InlineTokenizer>> {
        self.tokenizers.insert(name.into(), Box::new(tokenizer))
    }

    /// The tokenizer registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn InlineTokenizer> {
        self.tokenizers.get(name).map(|tokenizer| tokenizer.as_ref())
    }

    /// True if a tokenizer is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tokenizers.contains_key(name)
    }

    /// Names of tokenizers in the order they are tried.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Position of `name` in the order in which tokenizers are tried.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.methods.iter().position(|method| method == name)
    }

    /// Tokenizers in the order they are tried, paired with their names.
    ///
    /// Names in the order that have no registered tokenizer are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn InlineTokenizer)> {
        self.methods
            .iter()
            .filter_map(|name| self.get(name).map(|tokenizer| (name.as_str(), tokenizer)))
    }

    fn remove_method(&mut self, name: &str) {
        self.methods.retain(|method| method != name);
    }
}

/// Options for registering tag tokenizers.
#[derive(Debug)]
pub struct Options {
    anchor: String,
    link_name: String,
    tutorial_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            anchor: String::from(INLINE_TEXT),
            link_name: String::from(TOKENIZE_LINK),
            tutorial_name: String::from(TOKENIZE_TUTORIAL),
        }
    }
}

impl Options {
    /// Incrementally builds a new set of registration options.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsdoc_inline::registry::Options;
    /// let opts = Options::build().anchor("text").build();
    /// assert_eq!(opts.anchor(), "text");
    /// assert_eq!(opts.link_name(), "tokenizeLink");
    /// ```
    pub fn build() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Name of the tokenizer that the tag tokenizers are tried before.
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Name given to the `{@link}` tokenizer.
    pub fn link_name(&self) -> &str {
        &self.link_name
    }

    /// Name given to the `{@tutorial}` tokenizer.
    pub fn tutorial_name(&self) -> &str {
        &self.tutorial_name
    }

    fn validate(&self) -> Result<()> {
        let names = [self.anchor(), self.link_name(), self.tutorial_name()];
        for (i, name) in names.iter().enumerate() {
            if names[i + 1..].contains(name) {
                return Err(Error::InvalidOptions(format!(
                    "duplicate tokenizer name {name:?}"
                )));
            }
        }
        Ok(())
    }
}

/// A builder for registration options.
///
/// You probably don't want to use this directly; call [`Options::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Sets the name of the catch-all tokenizer that the tag tokenizers
    /// are tried before.
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.options.anchor = anchor.into();
        self
    }

    /// Sets the name given to the `{@link}` tokenizer.
    pub fn link_name(mut self, name: impl Into<String>) -> Self {
        self.options.link_name = name.into();
        self
    }

    /// Sets the name given to the `{@tutorial}` tokenizer.
    pub fn tutorial_name(mut self, name: impl Into<String>) -> Self {
        self.options.tutorial_name = name.into();
        self
    }

    /// Finalizes the [`Options`].
    pub fn build(self) -> Options {
        self.options
    }
}

/// Installs the `{@link}` and `{@tutorial}` tokenizers into `registry`.
///
/// The tokenizers are registered under [`Options::link_name()`] and
/// [`Options::tutorial_name()`], and tried, in that order, immediately
/// before the [`Options::anchor()`] tokenizer. The order of every other
/// tokenizer is unchanged.
///
/// Registering more than once is harmless: the tag tokenizers are moved
/// back in front of the anchor rather than listed twice.
///
/// Returns [`Error::InvalidOptions`] if any two of the anchor, link and
/// tutorial names are the same, or [`Error::MissingTokenizer`] if the
/// anchor is not one of the registry's tokenizers. Either error is meant to
/// be fatal when the parser is set up: `registry` is consumed and dropped,
/// so the caller has no registry left to fall back on.
pub fn register(mut registry: Registry, options: &Options) -> Result<Registry> {
    options.validate()?;
    let names = [options.link_name(), options.tutorial_name()];

    if names.iter().any(|name| registry.position(name).is_some()) {
        warn!("tag tokenizers are already registered; re-registering");
        for name in names {
            registry.remove_method(name);
        }
    }

    let index = registry
        .position(options.anchor())
        .ok_or_else(|| Error::MissingTokenizer(options.anchor().to_string()))?;

    registry.insert(options.link_name(), TagTokenizer::link());
    registry.insert(options.tutorial_name(), TagTokenizer::tutorial());
    for (offset, name) in names.iter().enumerate() {
        registry.methods.insert(index + offset, name.to_string());
    }

    debug!("registered tag tokenizers: {:?}", registry.methods());
    Ok(registry)
}

/// Installs the tag tokenizers into `registry` using the default [`Options`].
pub fn register_default(registry: Registry) -> Result<Registry> {
    register(registry, &Options::default())
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! jsdoc-inline teaches a Markdown parser to understand JSDoc's inline
//! `{@link}` and `{@tutorial}` tags. It provides two inline tokenizers and
//! an adapter that installs them into a host parser's tokenizer registry,
//! ahead of the host's catch-all text tokenizer.
//!
//! The following forms are recognized for both tags:
//!
//! ```text
//! {@link target}
//! {@link target|title}
//! {@link target title}
//! ```
//!
//! The `[title]({@link target})` form is a JSDoc misfeature and is **not**
//! handled; use regular Markdown links (`[title](target)`) instead.
//!
//! # Examples
//!
//! Install the tokenizers into a registry that already has a catch-all
//! text tokenizer named `inlineText`:
//!
//! ```
//! use jsdoc_inline::registry::{self, Options, Registry};
//! use jsdoc_inline::tokenizer::TagTokenizer;
//!
//! // Any tokenizer can stand in for the host's text tokenizer here.
//! let registry = Registry::new().with_tokenizer("inlineText", TagTokenizer::link());
//! let registry = registry::register(registry, &Options::default()).unwrap();
//! assert_eq!(
//!     registry.methods(),
//!     &["tokenizeLink", "tokenizeTutorial", "inlineText"],
//! );
//! ```
//!
//! Match a tag directly:
//!
//! ```
//! use jsdoc_inline::node::Node;
//! use jsdoc_inline::tokenizer::{InlineTokenizer, TagTokenizer};
//!
//! let mut eaten = vec![];
//! let mut eat = |subvalue: &str, node: Node| eaten.push((subvalue.to_string(), node));
//! let n = TagTokenizer::link().tokenize(&mut eat, "{@link ./foo.js|Foo Module} is here");
//! assert_eq!(n, Some(27));
//! assert_eq!(eaten[0].1.url(), Some("./foo.js"));
//! ```
//!
//! # License
//!
//! jsdoc-inline is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod error;
pub mod node;
pub mod registry;
pub mod tokenizer;

pub use error::{Error, Result};

#[cfg(test)]
mod test_utils;

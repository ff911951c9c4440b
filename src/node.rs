// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Syntax tree nodes produced by the JSDoc tag tokenizers.
//!
//! Nodes serialize to the same JSON shape as [mdast] nodes, with two
//! differences: tutorials get their own `tutorial` node type, and tag nodes
//! carry a `jsdoc` marker so downstream consumers can tell where they came
//! from:
//!
//! ```json
//! {
//!   "type": "link",
//!   "url": "./foo.js",
//!   "title": null,
//!   "jsdoc": true,
//!   "children": [{ "type": "text", "value": "Foo Module" }]
//! }
//! ```
//!
//! Consumers that only understand standard mdast can convert nodes with
//! [`From`]; see [`markdown::mdast::Node`].
//!
//! [mdast]: https://github.com/syntax-tree/mdast

use log::trace;
use markdown::mdast;
use serde::Serialize;
use std::fmt;

/// The kind of JSDoc inline tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TagKind {
    /// A `{@link target}` tag.
    Link,

    /// A `{@tutorial target}` tag.
    Tutorial,
}

impl TagKind {
    /// The tag keyword, as it appears after `{@`.
    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Link => "link",
            TagKind::Tutorial => "tutorial",
        }
    }

    /// The literal text that opens a tag of this kind.
    pub fn marker(&self) -> &'static str {
        match self {
            TagKind::Link => "{@link",
            TagKind::Tutorial => "{@tutorial",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node in the syntax tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Plain text.
    Text(Text),

    /// A `{@link}` tag.
    Link(Tag),

    /// A `{@tutorial}` tag.
    Tutorial(Tag),
}

impl Node {
    /// Creates a new text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Creates a new tag node of the given kind, pointing to `url` and
    /// displaying `text`.
    pub fn tag(kind: TagKind, url: impl Into<String>, text: impl Into<String>) -> Self {
        let tag = Tag::new(url, text);
        match kind {
            TagKind::Link => Node::Link(tag),
            TagKind::Tutorial => Node::Tutorial(tag),
        }
    }

    /// The kind of tag this node represents, or `None` for text.
    pub fn kind(&self) -> Option<TagKind> {
        match self {
            Node::Text(_) => None,
            Node::Link(_) => Some(TagKind::Link),
            Node::Tutorial(_) => Some(TagKind::Tutorial),
        }
    }

    /// The tag's destination, or `None` for text.
    pub fn url(&self) -> Option<&str> {
        self.as_tag().map(Tag::url)
    }

    /// The node's children, or `None` if it cannot have any.
    pub fn children(&self) -> Option<&[Node]> {
        self.as_tag().map(Tag::children)
    }

    fn as_tag(&self) -> Option<&Tag> {
        match self {
            Node::Text(_) => None,
            Node::Link(tag) | Node::Tutorial(tag) => Some(tag),
        }
    }
}

/// Plain text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Text {
    /// The text.
    pub value: String,
}

/// A JSDoc inline tag, such as `{@link ./foo.js|Foo Module}`.
///
/// Tags are only built with [`Tag::new()`], so a tag never has a title,
/// is always marked as coming from JSDoc, and always has exactly one
/// text child.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tag {
    url: String,
    title: Option<String>,
    jsdoc: bool,
    children: Vec<Node>,
}

impl Tag {
    /// Creates a new tag pointing to `url` and displaying `text`.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            jsdoc: true,
            children: vec![Node::text(text)],
        }
    }

    /// The tag's target, which is either a URL or the name of a symbol
    /// or tutorial.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Always `None`; the tag syntax has no way to express a title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Always `true`; marks the node as having come from a JSDoc tag.
    pub fn jsdoc(&self) -> bool {
        self.jsdoc
    }

    /// A single text node holding the tag's display text.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl From<Node> for mdast::Node {
    /// Converts a node into its closest mdast equivalent.
    ///
    /// mdast has no notion of tutorials, so both links and tutorials
    /// become [`mdast::Link`]s. The `jsdoc` marker is lost.
    fn from(node: Node) -> Self {
        match node {
            Node::Text(Text { value }) => mdast::Node::Text(mdast::Text {
                value,
                position: None,
            }),
            Node::Link(tag) | Node::Tutorial(tag) => mdast::Node::Link(mdast::Link {
                children: tag.children.into_iter().map(mdast::Node::from).collect(),
                position: None,
                url: tag.url,
                title: tag.title,
            }),
        }
    }
}

/// "Visit" a node and emit text.
pub trait Visitor {
    /// The generated text.
    fn text(&self) -> String;

    /// "Visit" a particular node in a tree.
    fn visit(&mut self, node: &Node);

    /// "Swallows" a node.
    ///
    /// Nothing is done by the visitor for the node, but it continues visiting
    /// the node's children.
    fn swallow(&mut self, node: &Node)
    where
        Self: Sized,
    {
        trace!("swallowing node: {node:?}");
        node.accept_children(self);
    }
}

/// A data structure that can be visited.
pub trait Visitable {
    /// Accept a visitor for processing the visitable item.
    fn accept<V: Visitor>(&self, visitor: &mut V);

    /// Accept a visitor for processing all child nodes.
    fn accept_children<V: Visitor>(&self, visitor: &mut V);
}

impl Visitable for Node {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit(self);
    }

    fn accept_children<V: Visitor>(&self, visitor: &mut V) {
        if let Some(children) = self.children() {
            for child in children {
                child.accept(visitor);
            }
        }
    }
}

/// Strips tags from `nodes`, leaving only their display text.
///
/// # Examples
///
/// ```
/// use jsdoc_inline::node::{Node, TagKind, plain_text};
///
/// let nodes = [
///     Node::text("See "),
///     Node::tag(TagKind::Link, "./foo.js", "Foo Module"),
///     Node::text(" for details."),
/// ];
/// assert_eq!(plain_text(&nodes), "See Foo Module for details.");
/// ```
pub fn plain_text(nodes: &[Node]) -> String {
    let mut visitor = PlainTextVisitor::default();
    for node in nodes {
        node.accept(&mut visitor);
    }
    visitor.text()
}

#[derive(Debug, Default)]
struct PlainTextVisitor {
    text: String,
}

impl Visitor for PlainTextVisitor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn visit(&mut self, node: &Node) {
        match node {
            Node::Text(Text { value }) => self.text.push_str(value),
            Node::Link(_) | Node::Tutorial(_) => self.swallow(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn it_returns_tag_names() {
        assert_eq!(TagKind::Link.name(), "link");
        assert_eq!(TagKind::Tutorial.name(), "tutorial");
        assert_eq!(TagKind::Tutorial.to_string(), "tutorial");
    }

    #[test]
    fn it_returns_tag_markers() {
        assert_eq!(TagKind::Link.marker(), "{@link");
        assert_eq!(TagKind::Tutorial.marker(), "{@tutorial");
    }

    #[test]
    fn it_builds_tags_with_a_single_text_child() {
        let node = Node::tag(TagKind::Link, "./foo.js", "Foo Module");
        assert_eq!(node.kind(), Some(TagKind::Link));
        assert_eq!(node.url(), Some("./foo.js"));
        assert_eq!(node.children(), Some(&[Node::text("Foo Module")][..]));
    }

    #[test]
    fn it_builds_tags_without_a_title_and_marked_as_jsdoc() {
        let tag = Tag::new("getting-started", "Getting Started");
        assert_eq!(tag.url(), "getting-started");
        assert_eq!(tag.title(), None);
        assert!(tag.jsdoc());
        assert_eq!(tag.children(), &[Node::text("Getting Started")]);
    }

    #[test]
    fn it_has_no_url_or_children_for_text() {
        let node = Node::text("plain text");
        assert_eq!(node.kind(), None);
        assert_eq!(node.url(), None);
        assert_eq!(node.children(), None);
    }

    #[test]
    fn it_serializes_links_like_mdast() {
        let node = Node::tag(TagKind::Link, "http://example.com", "http://example.com");
        let expected = json!({
            "type": "link",
            "url": "http://example.com",
            "title": null,
            "jsdoc": true,
            "children": [{"type": "text", "value": "http://example.com"}],
        });
        assert_eq!(serde_json::to_value(&node).unwrap(), expected);
    }

    #[test]
    fn it_serializes_tutorials_with_their_own_type() {
        let node = Node::tag(TagKind::Tutorial, "getting-started", "Getting Started");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "tutorial");
        assert_eq!(json["url"], "getting-started");
        assert_eq!(json["children"][0]["value"], "Getting Started");
    }

    #[test]
    fn it_converts_links_to_mdast() {
        let node: mdast::Node = Node::tag(TagKind::Link, "./foo.js", "Foo Module").into();
        match node {
            mdast::Node::Link(link) => {
                assert_eq!(link.url, "./foo.js");
                assert_eq!(link.title, None);
                assert_eq!(link.children.len(), 1);
                assert!(matches!(
                    &link.children[0],
                    mdast::Node::Text(mdast::Text { value, .. }) if value == "Foo Module"
                ));
            }
            _ => panic!("expected an mdast link, got {node:?}"),
        }
    }

    #[test]
    fn it_converts_tutorials_to_mdast_links() {
        let node: mdast::Node = Node::tag(TagKind::Tutorial, "getting-started", "intro").into();
        assert!(matches!(
            node,
            mdast::Node::Link(mdast::Link { ref url, .. }) if url == "getting-started"
        ));
    }

    #[test]
    fn it_strips_tags_to_plain_text() {
        let nodes = [
            Node::text("Read "),
            Node::tag(TagKind::Tutorial, "getting-started", "the tutorial"),
            Node::text(" or "),
            Node::tag(TagKind::Link, "Foo", "Foo"),
            Node::text("."),
        ];
        assert_eq!(plain_text(&nodes), "Read the tutorial or Foo.");
    }

    #[test]
    fn it_returns_empty_plain_text_for_no_nodes() {
        assert_eq!(plain_text(&[]), "");
    }
}

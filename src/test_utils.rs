use crate::node::{Node, Text};
use crate::registry::Registry;
use crate::tokenizer::{Eat, InlineTokenizer};

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs `tokenizer` over `value`, returning the number of bytes eaten
/// and the node produced, if any.
pub fn tokenize(tokenizer: &dyn InlineTokenizer, value: &str) -> Option<(usize, Node)> {
    let mut eaten = None;
    let mut eat = |subvalue: &str, node: Node| eaten = Some((subvalue.len(), node));
    let n = tokenizer.tokenize(&mut eat, value);
    let (len, node) = eaten?;
    assert_eq!(n, Some(len), "tokenizer returned a different length than it ate");
    Some((len, node))
}

/// A stand-in for a host parser's catch-all text tokenizer.
///
/// Eats one character at a time; [`TestParser`] merges adjacent text.
#[derive(Debug, Default)]
pub struct TextTokenizer;

impl TextTokenizer {
    pub fn new() -> Self {
        Self {}
    }
}

impl InlineTokenizer for TextTokenizer {
    fn tokenize(&self, eat: &mut dyn Eat, value: &str) -> Option<usize> {
        let len = value.chars().next()?.len_utf8();
        eat.eat(&value[..len], Node::text(&value[..len]));
        Some(len)
    }

    fn locate(&self, value: &str, from_index: usize) -> Option<usize> {
        (from_index < value.len()).then_some(from_index)
    }
}

/// A stand-in for a host parser that dispatches inline tokenizers in
/// registry order.
#[derive(Debug)]
pub struct TestParser {
    registry: Registry,
}

impl TestParser {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Parses `value` as paragraph text.
    pub fn parse(&self, value: &str) -> Vec<Node> {
        self.parse_inline(value, false)
    }

    /// Parses `value` as if it were the children of a link.
    pub fn parse_in_link(&self, value: &str) -> Vec<Node> {
        self.parse_inline(value, true)
    }

    fn parse_inline(&self, value: &str, in_link: bool) -> Vec<Node> {
        let mut nodes = vec![];
        let mut pos = 0;

        while pos < value.len() {
            let rest = &value[pos..];
            let mut eaten = None;

            for (_, tokenizer) in self.registry.iter() {
                if in_link && tokenizer.not_in_link() {
                    continue;
                }
                if tokenizer.locate(rest, 0) != Some(0) {
                    continue;
                }
                let mut eat = |_: &str, node: Node| push_node(&mut nodes, node);
                if let Some(n) = tokenizer.tokenize(&mut eat, rest) {
                    eaten = Some(n);
                    break;
                }
            }

            pos += match eaten {
                Some(n) => n,
                None => {
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    push_node(&mut nodes, Node::text(&rest[..len]));
                    len
                }
            };
        }

        nodes
    }
}

fn push_node(nodes: &mut Vec<Node>, node: Node) {
    if let Node::Text(Text { value }) = &node {
        if let Some(Node::Text(last)) = nodes.last_mut() {
            last.value.push_str(value);
            return;
        }
    }
    nodes.push(node);
}

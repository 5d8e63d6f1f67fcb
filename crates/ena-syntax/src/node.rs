use std::fmt;

use ena_errors::fatal;

use crate::Keyword;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Program,
    Block,
    Number,
    Identifier,
    EscapedIdentifier,
    String,
    Keyword,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Program => "PROGRAM",
            Self::Block => "BLOCK",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::EscapedIdentifier => "ESCAPED_IDENTIFIER",
            Self::String => "STRING",
            Self::Keyword => "KEYWORD",
        }
    }

    pub fn is_host(self) -> bool {
        matches!(self, Self::Program | Self::Block)
    }
}

/// Ordered children of a host node, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    children: Vec<Node>,
}

impl Host {
    pub const DEFAULT_CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut children = Vec::new();
        fatal::reserve(&mut children, capacity, "Host::with_capacity");
        Self { children }
    }

    /// Appends `node`, doubling the storage when it is full.
    pub fn push(&mut self, node: Node) {
        if self.children.len() == self.children.capacity() {
            let capacity = fatal::doubled(self.children.capacity());
            fatal::reserve(&mut self.children, capacity, "Host::push");
        }
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

/// A syntax tree node.
///
/// `Program` and `Block` are host nodes owning their children; every other
/// variant is a leaf owning its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Host),
    Block(Host),
    Number(f64),
    Identifier(Box<str>),
    EscapedIdentifier(Box<str>),
    String(Box<str>),
    Keyword(Keyword),
}

impl Node {
    pub fn program() -> Self {
        Self::Program(Host::new())
    }

    pub fn block() -> Self {
        Self::Block(Host::new())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn identifier(text: impl Into<Box<str>>) -> Self {
        Self::Identifier(text.into())
    }

    pub fn escaped_identifier(text: impl Into<Box<str>>) -> Self {
        Self::EscapedIdentifier(text.into())
    }

    pub fn string(text: impl Into<Box<str>>) -> Self {
        Self::String(text.into())
    }

    pub fn keyword(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::Block(_) => NodeKind::Block,
            Self::Number(_) => NodeKind::Number,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::EscapedIdentifier(_) => NodeKind::EscapedIdentifier,
            Self::String(_) => NodeKind::String,
            Self::Keyword(_) => NodeKind::Keyword,
        }
    }

    pub fn is_host(&self) -> bool {
        self.kind().is_host()
    }

    pub fn host(&self) -> Option<&Host> {
        match self {
            Self::Program(host) | Self::Block(host) => Some(host),
            _ => None,
        }
    }

    pub fn host_mut(&mut self) -> Option<&mut Host> {
        match self {
            Self::Program(host) | Self::Block(host) => Some(host),
            _ => None,
        }
    }

    /// Children of a host node; empty for leaves.
    pub fn children(&self) -> &[Self] {
        match self.host() {
            Some(host) => host.children(),
            None => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Self::count).sum::<usize>()
    }

    /// Destroys the subtree bottom-up and returns how many nodes were
    /// released. A host's children are released before its child storage,
    /// which is released before the host itself.
    pub fn dispose(self) -> usize {
        match self {
            Self::Program(host) | Self::Block(host) => {
                let mut released = 0;
                for child in host.children {
                    released += child.dispose();
                }
                released + 1
            }
            Self::Number(_)
            | Self::Identifier(_)
            | Self::EscapedIdentifier(_)
            | Self::String(_)
            | Self::Keyword(_) => 1,
        }
    }

    /// Indented dump, one node per line, one tab per level of depth.
    pub fn debug_tree(&self) -> String {
        DebugTree(self).to_string()
    }
}

struct DebugTree<'a>(&'a Node);

impl fmt::Display for DebugTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self.0, 0, f)
    }
}

fn fmt_node(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("\t")?;
    }
    f.write_str(node.kind().name())?;

    match node {
        Node::Program(host) | Node::Block(host) => {
            writeln!(f)?;
            for child in host.children() {
                fmt_node(child, depth + 1, f)?;
            }
            Ok(())
        }
        Node::Number(value) => writeln!(f, " {value}"),
        Node::Identifier(text) | Node::EscapedIdentifier(text) | Node::String(text) => {
            writeln!(f, " {text:?}")
        }
        Node::Keyword(keyword) => writeln!(f, " {keyword}"),
    }
}

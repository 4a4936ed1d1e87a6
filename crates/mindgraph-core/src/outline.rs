//! Outline trees produced by the markdown parser.
//!
//! An [`OutlineNode`] mirrors the heading and list hierarchy of a markdown
//! document. Content is the raw inline markdown of the heading, list item or
//! paragraph; markup is only stripped when the outline is flattened into a
//! [`Graph`](crate::graph::Graph).

/// A node of a parsed markdown outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineNode {
    content: String,
    children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Creates a node with the given content and children.
    pub fn new(content: impl Into<String>, children: Vec<OutlineNode>) -> Self {
        Self {
            content: content.into(),
            children,
        }
    }

    /// Creates a node without children.
    pub fn leaf(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new())
    }

    /// Builder-style helper appending a child.
    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn children(&self) -> &[OutlineNode] {
        &self.children
    }

    /// Returns `true` if the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Returns `true` for an outline with nothing to show: blank content and
    /// no children.
    pub fn is_degenerate(&self) -> bool {
        self.is_blank() && self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::len).sum::<usize>()
    }

    /// Always `false`; an outline node counts itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consumes the node, returning its content and children.
    pub fn into_parts(self) -> (String, Vec<OutlineNode>) {
        (self.content, self.children)
    }
}

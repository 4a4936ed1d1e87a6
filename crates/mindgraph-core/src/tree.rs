//! Parent-linked trees handed to the renderer.
//!
//! A [`Tree`] keeps node identity and tree position apart: nodes are stored in
//! an id-indexed map (in vertex input order), while each [`TreeNode`] holds the
//! ids of its parent and children. Children order is significant; it is the
//! order the renderer lays siblings out in.

use indexmap::IndexMap;

use crate::{
    identifier::Id,
    rendered::{RenderedEdge, RenderedGraph, RenderedNode},
};

/// The non-id payload of a vertex, carried through the tree untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeData {
    text: Option<String>,
}

impl NodeData {
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A node placed in a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    id: Id,
    data: NodeData,
    children: Vec<Id>,
    parent: Option<Id>,
}

impl TreeNode {
    /// Creates a detached node with no parent and no children.
    pub fn new(id: Id, data: NodeData) -> Self {
        Self {
            id,
            data,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Ids of the children, in edge input order.
    pub fn children(&self) -> &[Id] {
        &self.children
    }

    pub fn parent(&self) -> Option<Id> {
        self.parent
    }

    /// Appends a child id.
    pub fn push_child(&mut self, child: Id) {
        self.children.push(child);
    }

    /// Sets the parent id.
    pub fn set_parent(&mut self, parent: Id) {
        self.parent = Some(parent);
    }
}

/// A single-root tree of [`TreeNode`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Id,
    nodes: IndexMap<Id, TreeNode>,
}

impl Tree {
    /// Creates a tree from a node store and the id of its root.
    ///
    /// Returns `None` if `root` is not present in `nodes`.
    pub fn new(root: Id, nodes: IndexMap<Id, TreeNode>) -> Option<Self> {
        nodes.contains_key(&root).then_some(Self { root, nodes })
    }

    pub fn root_id(&self) -> Id {
        self.root
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[&self.root]
    }

    pub fn node(&self, id: Id) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of parent -> child links in the tree.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.children.len()).sum()
    }

    pub fn is_root(&self, id: Id) -> bool {
        self.root == id
    }

    /// Iterates over the children of `id` in order.
    ///
    /// Yields nothing for an unknown id.
    pub fn children(&self, id: Id) -> impl Iterator<Item = &TreeNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.nodes.get(child))
    }

    /// The label a renderer shows for `id`: its text, or the id itself for a
    /// blank node.
    pub fn label(&self, id: Id) -> Option<String> {
        self.nodes.get(&id).map(|node| match node.data.text() {
            Some(text) => text.to_string(),
            None => id.to_owned_string(),
        })
    }

    /// Number of nodes below `id` (the count shown on a collapsed node).
    pub fn descendant_count(&self, id: Id) -> Option<usize> {
        let node = self.nodes.get(&id)?;
        let mut stack: Vec<Id> = node.children.clone();
        let mut count = 0;
        while let Some(current) = stack.pop() {
            count += 1;
            if count > self.nodes.len() {
                return None;
            }
            if let Some(child) = self.nodes.get(&current) {
                stack.extend(child.children.iter().copied());
            }
        }
        Some(count)
    }

    /// Distance from the root; the root has depth 0.
    pub fn depth(&self, id: Id) -> Option<usize> {
        let mut node = self.nodes.get(&id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.nodes.get(&parent)?;
            depth += 1;
            if depth > self.nodes.len() {
                return None;
            }
        }
        Some(depth)
    }

    /// Iterates over the nodes reachable from the root, depth first, parents
    /// before children and siblings in order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Flattens the tree into the node/edge snapshot a renderer works on.
    ///
    /// Nodes appear in pre-order; each node's child edges follow its
    /// children order.
    pub fn to_rendered(&self) -> RenderedGraph {
        let mut rendered = RenderedGraph::default();
        for node in self.preorder() {
            rendered.push_node(RenderedNode::new(node.id, node.data.clone()));
            for child in &node.children {
                rendered.push_edge(RenderedEdge::new(node.id, *child));
            }
        }
        rendered
    }
}

/// Pre-order iterator returned by [`Tree::preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<Id>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(node) = self.tree.nodes.get(&id) {
                self.stack.extend(node.children.iter().rev().copied());
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds:
    ///
    /// ```text
    /// r
    /// ├── a
    /// │   └── a1
    /// └── b
    /// ```
    fn sample_tree() -> Tree {
        let mut nodes = IndexMap::new();
        for (id, text) in [("r", Some("Root")), ("a", Some("A")), ("b", None), ("a1", Some("A1"))] {
            let id = Id::new(id);
            nodes.insert(id, TreeNode::new(id, NodeData::new(text.map(String::from))));
        }
        for (parent, child) in [("r", "a"), ("r", "b"), ("a", "a1")] {
            let (parent, child) = (Id::new(parent), Id::new(child));
            nodes[&parent].push_child(child);
            nodes[&child].set_parent(parent);
        }
        Tree::new(Id::new("r"), nodes).unwrap()
    }

    #[test]
    fn test_new_requires_root() {
        let nodes = IndexMap::new();
        assert!(Tree::new(Id::new("missing"), nodes).is_none());
    }

    #[test]
    fn test_counts() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert!(tree.is_root(Id::new("r")));
        assert_eq!(tree.root().id(), "r");
    }

    #[test]
    fn test_children_in_order() {
        let tree = sample_tree();
        let children: Vec<Id> = tree.children(Id::new("r")).map(TreeNode::id).collect();
        assert_eq!(children, vec![Id::new("a"), Id::new("b")]);
        assert_eq!(tree.children(Id::new("unknown")).count(), 0);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let tree = sample_tree();
        assert_eq!(tree.label(Id::new("a")).as_deref(), Some("A"));
        assert_eq!(tree.label(Id::new("b")).as_deref(), Some("b"));
        assert_eq!(tree.label(Id::new("zzz")), None);
    }

    #[test]
    fn test_descendant_count_and_depth() {
        let tree = sample_tree();
        assert_eq!(tree.descendant_count(Id::new("r")), Some(3));
        assert_eq!(tree.descendant_count(Id::new("a")), Some(1));
        assert_eq!(tree.descendant_count(Id::new("b")), Some(0));
        assert_eq!(tree.depth(Id::new("r")), Some(0));
        assert_eq!(tree.depth(Id::new("a1")), Some(2));
    }

    #[test]
    fn test_preorder() {
        let tree = sample_tree();
        let order: Vec<String> = tree.preorder().map(|n| n.id().to_string()).collect();
        assert_eq!(order, vec!["r", "a", "a1", "b"]);
    }

    #[test]
    fn test_to_rendered() {
        let tree = sample_tree();
        let rendered = tree.to_rendered();

        assert_eq!(rendered.nodes().len(), 4);
        assert_eq!(rendered.edges().len(), 3);
        assert_eq!(rendered.nodes()[0].id(), "r");
        assert_eq!(rendered.nodes()[0].data().text(), Some("Root"));
        assert_eq!(rendered.edges()[0], RenderedEdge::new(Id::new("r"), Id::new("a")));
        assert_eq!(rendered.edges()[1], RenderedEdge::new(Id::new("r"), Id::new("b")));
        assert_eq!(rendered.edges()[2], RenderedEdge::new(Id::new("a"), Id::new("a1")));
    }
}

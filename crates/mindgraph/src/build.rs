//! Flat graph to parent-linked tree.

use indexmap::IndexMap;
use log::debug;

use mindgraph_core::{
    graph::Graph,
    tree::{NodeData, Tree, TreeNode},
};

use crate::{links::GraphLinks, validate::ValidationError};

/// Build the tree of a validated graph.
///
/// Every vertex becomes one node carrying its text. Children follow edge
/// order. The graph is expected to have passed [`validate`]; when it has
/// several roots the first one in vertex order is used.
///
/// [`validate`]: crate::validate::validate
///
/// # Errors
///
/// Returns [`ValidationError::NoRoot`] if every vertex has a parent.
pub fn build(graph: &Graph) -> Result<Tree, ValidationError> {
    let links = GraphLinks::new(graph);
    let root = links.roots().next().ok_or(ValidationError::NoRoot)?;

    let mut nodes = IndexMap::with_capacity(links.vertex_count());
    for vertex in links.vertices() {
        let id = vertex.id();
        let mut node = TreeNode::new(id, NodeData::new(vertex.text().map(str::to_string)));
        for child in links.children(id) {
            node.push_child(child);
        }
        if let Some(parent) = links.parents(id).next() {
            node.set_parent(parent);
        }
        nodes.insert(id, node);
    }

    let tree = Tree::new(root, nodes).ok_or(ValidationError::NoRoot)?;
    debug!(root:% = root, nodes = tree.len(); "Tree built");
    Ok(tree)
}

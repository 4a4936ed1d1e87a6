//! Renderer-side snapshot of a mind-map.
//!
//! Graph renderers keep their own flat node/edge model of the tree they draw
//! and may reorder it freely. [`RenderedGraph`] is that model as the core sees
//! it: nodes carry an id and the vertex payload, edges carry `source` and
//! `target` ids. The serializer turns a snapshot back into a
//! [`Graph`](crate::graph::Graph).

use crate::{identifier::Id, tree::NodeData};

/// A node as held by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    id: Id,
    data: NodeData,
}

impl RenderedNode {
    pub fn new(id: Id, data: NodeData) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }
}

/// An edge as held by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderedEdge {
    source: Id,
    target: Id,
}

impl RenderedEdge {
    pub fn new(source: Id, target: Id) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }
}

/// Flat node/edge snapshot of a rendered mind-map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedGraph {
    nodes: Vec<RenderedNode>,
    edges: Vec<RenderedEdge>,
}

impl RenderedGraph {
    pub fn new(nodes: Vec<RenderedNode>, edges: Vec<RenderedEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[RenderedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[RenderedEdge] {
        &self.edges
    }

    pub fn push_node(&mut self, node: RenderedNode) {
        self.nodes.push(node);
    }

    pub fn push_edge(&mut self, edge: RenderedEdge) {
        self.edges.push(edge);
    }
}

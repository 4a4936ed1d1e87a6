//! The flat vertex/edge form of a mind-map document.
//!
//! This is the wire representation read from and written to JSON files:
//!
//! ```json
//! {"verts":[{"id":"1","str":"Hi"},{"id":"2"}],"edges":[{"from":"1","to":"2"}]}
//! ```
//!
//! A [`Graph`] carries no structural guarantees on its own. It is checked by
//! the validator and turned into a [`Tree`](crate::tree::Tree) before anything
//! is rendered.

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// A single mind-map entry with an optional display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    id: Id,

    /// Display label, stored under the `str` key on the wire.
    #[serde(rename = "str", default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Vertex {
    /// Creates a vertex with the given id and optional text.
    pub fn new(id: impl Into<Id>, text: Option<String>) -> Self {
        Self {
            id: id.into(),
            text,
        }
    }

    /// Creates a vertex with a display text.
    pub fn with_text(id: impl Into<Id>, text: impl Into<String>) -> Self {
        Self::new(id, Some(text.into()))
    }

    /// Creates a vertex without display text.
    pub fn blank(id: impl Into<Id>) -> Self {
        Self::new(id, None)
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A directed parent -> child relation between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    from: Id,
    to: Id,
}

impl Edge {
    /// Creates an edge from `from` (parent) to `to` (child).
    pub fn new(from: impl Into<Id>, to: impl Into<Id>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The parent end of the edge.
    pub fn from(&self) -> Id {
        self.from
    }

    /// The child end of the edge.
    pub fn to(&self) -> Id {
        self.to
    }
}

/// A document as flat vertex and edge lists.
///
/// Order is preserved as given but carries no meaning except for children
/// order, which follows edge order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    verts: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from vertex and edge lists.
    pub fn new(verts: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { verts, edges }
    }

    pub fn verts(&self) -> &[Vertex] {
        &self.verts
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Appends a vertex.
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.verts.push(vertex);
    }

    /// Appends an edge.
    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Splits the graph into its vertex and edge lists.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Edge>) {
        (self.verts, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_form() {
        let json = r#"{"verts":[{"id":"1","str":"Hi"},{"id":"2","str":"Bye"}],"edges":[{"from":"1","to":"2"}]}"#;
        let graph: Graph = serde_json::from_str(json).unwrap();

        assert_eq!(graph.verts().len(), 2);
        assert_eq!(graph.verts()[0].id(), "1");
        assert_eq!(graph.verts()[0].text(), Some("Hi"));
        assert_eq!(graph.edges(), &[Edge::new("1", "2")]);
    }

    #[test]
    fn test_text_is_optional_and_nullable() {
        let json = r#"{"verts":[{"id":"a"},{"id":"b","str":null}],"edges":[]}"#;
        let graph: Graph = serde_json::from_str(json).unwrap();

        assert_eq!(graph.verts()[0].text(), None);
        assert_eq!(graph.verts()[1].text(), None);
    }

    #[test]
    fn test_serialize_omits_missing_text() {
        let graph = Graph::new(
            vec![Vertex::with_text("1", "Hi"), Vertex::blank("2")],
            vec![Edge::new("1", "2")],
        );

        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(
            json,
            r#"{"verts":[{"id":"1","str":"Hi"},{"id":"2"}],"edges":[{"from":"1","to":"2"}]}"#
        );
    }

    #[test]
    fn test_push_and_into_parts() {
        let mut graph = Graph::default();
        assert!(graph.is_empty());

        graph.push_vertex(Vertex::blank("0"));
        graph.push_vertex(Vertex::with_text("1", "child"));
        graph.push_edge(Edge::new("0", "1"));

        assert!(!graph.is_empty());
        let (verts, edges) = graph.into_parts();
        assert_eq!(verts.len(), 2);
        assert_eq!(edges[0].from(), "0");
        assert_eq!(edges[0].to(), "1");
    }
}

//! Adjacency index over a flat [`Graph`].
//!
//! [`GraphLinks`] keeps vertex identity and structure apart: vertices are
//! looked up by [`Id`] in input order, and each vertex has lists of incoming
//! and outgoing edge indices. Both the validator and the tree builder work on
//! this index instead of rescanning the edge list.
//!
//! The index does not require the graph to be valid. Duplicate ids keep their
//! first vertex, and edges are indexed even when an endpoint is unknown.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexMap;

use mindgraph_core::{
    graph::{Edge, Graph, Vertex},
    identifier::Id,
};

/// Index of an edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeIndex(usize);

/// Incoming and outgoing edges of every vertex of a borrowed [`Graph`].
#[derive(Debug)]
pub(crate) struct GraphLinks<'g> {
    verts: IndexMap<Id, &'g Vertex>,
    edges: &'g [Edge],
    income_edges: HashMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex>>,
}

impl<'g> GraphLinks<'g> {
    /// Index `graph`.
    pub(crate) fn new(graph: &'g Graph) -> Self {
        let mut verts = IndexMap::with_capacity(graph.verts().len());
        for vertex in graph.verts() {
            verts.entry(vertex.id()).or_insert(vertex);
        }

        let mut income_edges: HashMap<Id, Vec<EdgeIndex>> = HashMap::new();
        let mut outgoing_edges: HashMap<Id, Vec<EdgeIndex>> = HashMap::new();
        for (idx, edge) in graph.edges().iter().enumerate() {
            outgoing_edges.entry(edge.from()).or_default().push(EdgeIndex(idx));
            income_edges.entry(edge.to()).or_default().push(EdgeIndex(idx));
        }

        Self {
            verts,
            edges: graph.edges(),
            income_edges,
            outgoing_edges,
        }
    }

    /// Iterates over the distinct vertices in input order.
    pub(crate) fn vertices(&self) -> impl Iterator<Item = &'g Vertex> {
        self.verts.values().copied()
    }

    /// Checks if a vertex with the given id exists.
    pub(crate) fn contains(&self, id: Id) -> bool {
        self.verts.contains_key(&id)
    }

    /// Returns the total number of distinct vertices.
    pub(crate) fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Number of edges pointing at `id`.
    pub(crate) fn parent_count(&self, id: Id) -> usize {
        self.income_edges.get(&id).map_or(0, Vec::len)
    }

    /// Parents of `id`, in edge order.
    pub(crate) fn parents(&self, id: Id) -> impl Iterator<Item = Id> {
        self.income_edges
            .get(&id)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].from())
    }

    /// Children of `id`, in edge order.
    pub(crate) fn children(&self, id: Id) -> impl Iterator<Item = Id> {
        self.outgoing_edges
            .get(&id)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].to())
    }

    /// Vertices without incoming edges, in vertex order.
    pub(crate) fn roots(&self) -> impl Iterator<Item = Id> {
        self.verts
            .keys()
            .copied()
            .filter(|id| !self.income_edges.contains_key(id))
    }

    /// Every vertex reachable from `start`, `start` included.
    pub(crate) fn reachable_from(&self, start: Id) -> HashSet<Id> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            for child in self.children(id) {
                if seen.insert(child) {
                    queue.push_back(child);
                }
            }
        }
        seen
    }

    /// Vertices not reachable from `start`, in vertex order.
    pub(crate) fn unreachable_from(&self, start: Id) -> Vec<Id> {
        let reachable = self.reachable_from(start);
        self.verts
            .keys()
            .copied()
            .filter(|id| !reachable.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(verts: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::new(
            verts.iter().map(|id| Vertex::blank(*id)).collect(),
            edges.iter().map(|(from, to)| Edge::new(*from, *to)).collect(),
        )
    }

    fn ids(ids: impl IntoIterator<Item = Id>) -> Vec<String> {
        ids.into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::default();
        let links = GraphLinks::new(&graph);

        assert_eq!(links.vertex_count(), 0);
        assert_eq!(links.roots().count(), 0);
    }

    #[test]
    fn test_roots_in_vertex_order() {
        let graph = graph(&["b", "a", "c"], &[("b", "c")]);
        let links = GraphLinks::new(&graph);

        assert_eq!(ids(links.roots()), vec!["b", "a"]);
    }

    #[test]
    fn test_children_and_parents_follow_edge_order() {
        let graph = graph(&["r", "x", "y", "z"], &[("r", "y"), ("r", "x"), ("z", "x")]);
        let links = GraphLinks::new(&graph);

        assert_eq!(ids(links.children(Id::new("r"))), vec!["y", "x"]);
        assert_eq!(ids(links.parents(Id::new("x"))), vec!["r", "z"]);
        assert_eq!(links.parent_count(Id::new("x")), 2);
        assert_eq!(links.parent_count(Id::new("r")), 0);
        assert_eq!(links.children(Id::new("missing")).count(), 0);
    }

    #[test]
    fn test_duplicate_ids_keep_first_vertex() {
        let graph = Graph::new(
            vec![Vertex::with_text("a", "first"), Vertex::with_text("a", "second")],
            Vec::new(),
        );
        let links = GraphLinks::new(&graph);

        assert_eq!(links.vertex_count(), 1);
        let texts: Vec<_> = links.vertices().map(Vertex::text).collect();
        assert_eq!(texts, vec![Some("first")]);
    }

    #[test]
    fn test_reachability_with_detached_cycle() {
        let graph = graph(&["r", "a", "b", "c"], &[("r", "a"), ("b", "c"), ("c", "b")]);
        let links = GraphLinks::new(&graph);

        let reachable = links.reachable_from(Id::new("r"));
        assert!(reachable.contains(&Id::new("a")));
        assert!(!reachable.contains(&Id::new("b")));
        assert_eq!(ids(links.unreachable_from(Id::new("r"))), vec!["b", "c"]);
        assert!(links.contains(Id::new("c")));
    }
}

//! Renderer snapshot to the JSON wire format.

use log::trace;

use mindgraph_core::{
    graph::{Edge, Graph, Vertex},
    rendered::RenderedGraph,
};

/// Convert a renderer snapshot back into a flat graph.
///
/// Node and edge order is kept as the renderer reports it.
pub fn serialize(rendered: &RenderedGraph) -> Graph {
    let verts = rendered
        .nodes()
        .iter()
        .map(|node| Vertex::new(node.id(), node.data().text().map(str::to_string)))
        .collect();
    let edges = rendered
        .edges()
        .iter()
        .map(|edge| Edge::new(edge.source(), edge.target()))
        .collect();
    Graph::new(verts, edges)
}

/// Encode a graph as compact JSON.
///
/// Vertices without text omit the `str` key.
///
/// # Errors
///
/// Returns the encoder error; a [`Graph`] has no values JSON cannot hold.
pub fn to_json(graph: &Graph) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(graph)?;
    trace!(bytes = json.len(); "Graph encoded");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use mindgraph_core::{
        identifier::Id,
        rendered::{RenderedEdge, RenderedNode},
        tree::NodeData,
    };

    use super::*;

    #[test]
    fn test_serialize_snapshot() {
        let rendered = RenderedGraph::new(
            vec![
                RenderedNode::new(Id::new("2"), NodeData::new(None)),
                RenderedNode::new(Id::new("1"), NodeData::new(Some("Hi".to_string()))),
            ],
            vec![RenderedEdge::new(Id::new("1"), Id::new("2"))],
        );

        let graph = serialize(&rendered);
        assert_eq!(graph.verts(), &[Vertex::blank("2"), Vertex::with_text("1", "Hi")]);
        assert_eq!(graph.edges(), &[Edge::new("1", "2")]);
        assert_eq!(
            to_json(&graph).unwrap(),
            r#"{"verts":[{"id":"2"},{"id":"1","str":"Hi"}],"edges":[{"from":"1","to":"2"}]}"#
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let graph = serialize(&RenderedGraph::default());
        assert_eq!(to_json(&graph).unwrap(), r#"{"verts":[],"edges":[]}"#);
    }
}

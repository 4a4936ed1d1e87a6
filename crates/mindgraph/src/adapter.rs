//! Markdown outline to flat graph.
//!
//! The outline is walked breadth first. Each node gets the next id from a
//! counter starting at `0`, so ids follow level order: the root is `0`, its
//! children come next, then their children. Every non-root node adds one
//! edge from its parent.

use std::collections::VecDeque;

use log::debug;

use mindgraph_core::{
    graph::{Edge, Graph, Vertex},
    identifier::Id,
    outline::OutlineNode,
};
use mindgraph_parser::strip_inline;

/// Flatten an outline into a graph.
///
/// Returns `None` for a degenerate outline (blank root without children);
/// such an edit leaves the current document as it is.
///
/// The result always passes [`validate`](crate::validate::validate).
pub fn adapt(outline: &OutlineNode) -> Option<Graph> {
    if outline.is_degenerate() {
        debug!("Outline is empty, nothing to adapt");
        return None;
    }

    let mut graph = Graph::default();
    let mut queue: VecDeque<(&OutlineNode, Option<Id>)> = VecDeque::from([(outline, None)]);
    let mut next = 0;

    while let Some((node, parent)) = queue.pop_front() {
        let id = Id::from_index(next);
        next += 1;

        graph.push_vertex(Vertex::new(id, vertex_text(node.content())));
        if let Some(parent) = parent {
            graph.push_edge(Edge::new(parent, id));
        }
        queue.extend(node.children().iter().map(|child| (child, Some(id))));
    }

    debug!(verts = graph.verts().len(); "Outline adapted");
    Some(graph)
}

/// Plain text of a node, or `None` when nothing visible is left.
fn vertex_text(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return None;
    }
    let text = strip_inline(content);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn test_degenerate_outline() {
        assert_eq!(adapt(&OutlineNode::default()), None);
        assert_eq!(adapt(&OutlineNode::leaf("  \n ")), None);
    }

    #[test]
    fn test_blank_root_with_children_is_adapted() {
        let outline = OutlineNode::leaf("").with_child(OutlineNode::leaf("child"));
        let graph = adapt(&outline).unwrap();

        assert_eq!(graph.verts(), &[Vertex::blank("0"), Vertex::with_text("1", "child")]);
        assert_eq!(graph.edges(), &[Edge::new("0", "1")]);
    }

    #[test]
    fn test_breadth_first_ids() {
        let outline = OutlineNode::leaf("root")
            .with_child(OutlineNode::leaf("A").with_child(OutlineNode::leaf("A1")))
            .with_child(OutlineNode::leaf("B"));

        let graph = adapt(&outline).unwrap();
        let verts: Vec<(String, Option<&str>)> = graph
            .verts()
            .iter()
            .map(|v| (v.id().to_string(), v.text()))
            .collect();

        assert_eq!(
            verts,
            vec![
                ("0".to_string(), Some("root")),
                ("1".to_string(), Some("A")),
                ("2".to_string(), Some("B")),
                ("3".to_string(), Some("A1")),
            ]
        );
        assert_eq!(
            graph.edges(),
            &[Edge::new("0", "1"), Edge::new("0", "2"), Edge::new("1", "3")]
        );
        assert_eq!(validate(&graph), Ok(()));
    }

    #[test]
    fn test_markup_stripped() {
        let outline = OutlineNode::leaf("**Plan** for [Q3](https://x.io)")
            .with_child(OutlineNode::leaf("<br>"));
        let graph = adapt(&outline).unwrap();

        assert_eq!(graph.verts()[0].text(), Some("Plan for Q3"));
        assert_eq!(graph.verts()[1].text(), None);
    }
}

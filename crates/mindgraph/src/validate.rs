//! Structural validation of mind-map documents.
//!
//! A document is valid when it is a single-root tree:
//!
//! 1. it is an object with `verts` and `edges` arrays of the right shape;
//! 2. vertex ids are pairwise distinct;
//! 3. every edge joins two known vertices;
//! 4. no vertex has more than one parent;
//! 5. exactly one vertex has no parent;
//! 6. every vertex is reachable from that root.
//!
//! Checks run in this order and stop at the first failure. Nothing here
//! builds a tree or touches session state, so a rejected document has no
//! side effects.

use std::{collections::HashSet, fmt::Write as _};

use log::{debug, trace};
use serde_json::{Map, Value};
use thiserror::Error;

use mindgraph_core::{
    graph::{Edge, Graph, Vertex},
    identifier::Id,
};
use mindgraph_parser::error::ErrorCode;

use crate::links::GraphLinks;

/// A reason a document is not a valid mind-map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("schema error: {0}")]
    Schema(String),

    #[error("duplicate vertex id `{0}`")]
    DuplicateId(Id),

    #[error("edge `{from}` -> `{to}` references an unknown vertex")]
    DanglingEdge { from: Id, to: Id },

    #[error("vertex `{0}` has more than one parent")]
    MultiParent(Id),

    #[error("document has no root vertex")]
    NoRoot,

    #[error("document has several root vertices: {}", id_list(.0))]
    MultipleRoots(Vec<Id>),

    #[error("vertices not reachable from the root: {}", id_list(.0))]
    Unreachable(Vec<Id>),
}

impl ValidationError {
    /// The diagnostic code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Schema(_) => ErrorCode::E200,
            Self::DuplicateId(_) => ErrorCode::E201,
            Self::DanglingEdge { .. } => ErrorCode::E202,
            Self::MultiParent(_) => ErrorCode::E203,
            Self::NoRoot => ErrorCode::E204,
            Self::MultipleRoots(_) => ErrorCode::E205,
            Self::Unreachable(_) => ErrorCode::E206,
        }
    }
}

fn id_list(ids: &[Id]) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "`{id}`");
    }
    out
}

/// Check a decoded JSON document and return it as a typed [`Graph`].
///
/// Runs every check, starting with the document shape.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_document(document: &Value) -> Result<Graph, ValidationError> {
    let graph = decode_graph(document)?;
    validate(&graph)?;
    Ok(graph)
}

/// Check the structure of a typed graph.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate(graph: &Graph) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(graph.verts().len());
    for vertex in graph.verts() {
        if !seen.insert(vertex.id()) {
            return Err(ValidationError::DuplicateId(vertex.id()));
        }
    }

    let links = GraphLinks::new(graph);

    for edge in graph.edges() {
        if !links.contains(edge.from()) || !links.contains(edge.to()) {
            return Err(ValidationError::DanglingEdge {
                from: edge.from(),
                to: edge.to(),
            });
        }
    }

    if let Some(vertex) = links
        .vertices()
        .find(|vertex| links.parent_count(vertex.id()) > 1)
    {
        return Err(ValidationError::MultiParent(vertex.id()));
    }

    let roots: Vec<Id> = links.roots().collect();
    let root = match roots.as_slice() {
        [] => return Err(ValidationError::NoRoot),
        [root] => *root,
        _ => return Err(ValidationError::MultipleRoots(roots)),
    };

    let unreachable = links.unreachable_from(root);
    if !unreachable.is_empty() {
        return Err(ValidationError::Unreachable(unreachable));
    }

    debug!(
        root:% = root,
        verts = graph.verts().len(),
        edges = graph.edges().len();
        "Document validated"
    );
    Ok(())
}

fn decode_graph(document: &Value) -> Result<Graph, ValidationError> {
    let object = document
        .as_object()
        .ok_or_else(|| schema("document must be a JSON object"))?;

    let verts = array_field(object, "verts", "document")?
        .iter()
        .enumerate()
        .map(|(i, value)| decode_vertex(i, value))
        .collect::<Result<Vec<_>, _>>()?;

    let edges = array_field(object, "edges", "document")?
        .iter()
        .enumerate()
        .map(|(i, value)| decode_edge(i, value))
        .collect::<Result<Vec<_>, _>>()?;

    trace!(verts = verts.len(), edges = edges.len(); "Document shape checked");
    Ok(Graph::new(verts, edges))
}

fn decode_vertex(index: usize, value: &Value) -> Result<Vertex, ValidationError> {
    let context = format!("verts[{index}]");
    let object = value
        .as_object()
        .ok_or_else(|| schema(format!("{context} must be an object")))?;

    let id = string_field(object, "id", &context)?;
    let text = match object.get("str") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => return Err(schema(format!("{context}.str must be a string or null"))),
    };

    Ok(Vertex::new(id, text))
}

fn decode_edge(index: usize, value: &Value) -> Result<Edge, ValidationError> {
    let context = format!("edges[{index}]");
    let object = value
        .as_object()
        .ok_or_else(|| schema(format!("{context} must be an object")))?;

    let from = string_field(object, "from", &context)?;
    let to = string_field(object, "to", &context)?;
    Ok(Edge::new(from, to))
}

fn array_field<'v>(
    object: &'v Map<String, Value>,
    key: &str,
    context: &str,
) -> Result<&'v Vec<Value>, ValidationError> {
    match object.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(schema(format!("{context}.{key} must be an array"))),
        None => Err(schema(format!("{context} is missing `{key}`"))),
    }
}

fn string_field<'v>(
    object: &'v Map<String, Value>,
    key: &str,
    context: &str,
) -> Result<&'v str, ValidationError> {
    match object.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(schema(format!("{context}.{key} must be a string"))),
        None => Err(schema(format!("{context} is missing `{key}`"))),
    }
}

fn schema(message: impl Into<String>) -> ValidationError {
    ValidationError::Schema(message.into())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn graph(verts: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::new(
            verts.iter().map(|id| Vertex::blank(*id)).collect(),
            edges.iter().map(|(from, to)| Edge::new(*from, *to)).collect(),
        )
    }

    #[test]
    fn test_valid_tree() {
        let graph = graph(&["r", "a", "b", "a1"], &[("r", "a"), ("r", "b"), ("a", "a1")]);
        assert_eq!(validate(&graph), Ok(()));
    }

    #[test]
    fn test_single_vertex() {
        assert_eq!(validate(&graph(&["only"], &[])), Ok(()));
    }

    #[test]
    fn test_empty_graph_has_no_root() {
        assert_eq!(validate(&Graph::default()), Err(ValidationError::NoRoot));
    }

    #[test]
    fn test_duplicate_id() {
        let result = validate(&graph(&["1", "2", "1"], &[]));
        assert_eq!(result, Err(ValidationError::DuplicateId(Id::new("1"))));
    }

    #[test]
    fn test_dangling_edge() {
        let result = validate(&graph(&["1", "2"], &[("1", "2"), ("2", "ghost")]));
        assert_eq!(
            result,
            Err(ValidationError::DanglingEdge {
                from: Id::new("2"),
                to: Id::new("ghost"),
            })
        );
    }

    #[test]
    fn test_multi_parent() {
        let result = validate(&graph(&["r", "a", "b"], &[("r", "a"), ("r", "b"), ("a", "b")]));
        assert_eq!(result, Err(ValidationError::MultiParent(Id::new("b"))));
    }

    #[test]
    fn test_multi_parent_reports_first_vertex_in_order() {
        // `c` gets its second parent before `b` does, but `b` is listed first.
        let result = validate(&graph(
            &["r", "a", "b", "c"],
            &[("r", "a"), ("r", "c"), ("a", "c"), ("r", "b"), ("a", "b")],
        ));
        assert_eq!(result, Err(ValidationError::MultiParent(Id::new("b"))));
    }

    #[test]
    fn test_multiple_roots() {
        let result = validate(&graph(&["1", "2"], &[]));
        assert_eq!(
            result,
            Err(ValidationError::MultipleRoots(vec![Id::new("1"), Id::new("2")]))
        );
    }

    #[test]
    fn test_cycle_without_root() {
        let result = validate(&graph(&["a", "b"], &[("a", "b"), ("b", "a")]));
        assert_eq!(result, Err(ValidationError::NoRoot));
    }

    #[test]
    fn test_detached_cycle_is_unreachable() {
        let result = validate(&graph(&["r", "a", "b"], &[("a", "b"), ("b", "a")]));
        assert_eq!(
            result,
            Err(ValidationError::Unreachable(vec![Id::new("a"), Id::new("b")]))
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        // Duplicate id wins over the dangling edge that follows it.
        let result = validate(&graph(&["1", "1"], &[("1", "nope")]));
        assert_eq!(result, Err(ValidationError::DuplicateId(Id::new("1"))));
    }

    #[test]
    fn test_document_shape() {
        let cases = [
            json!([]),
            json!({"verts": []}),
            json!({"edges": []}),
            json!({"verts": {}, "edges": []}),
            json!({"verts": [1], "edges": []}),
            json!({"verts": [{"str": "x"}], "edges": []}),
            json!({"verts": [{"id": 1}], "edges": []}),
            json!({"verts": [{"id": "1", "str": 5}], "edges": []}),
            json!({"verts": [{"id": "1"}], "edges": [{"from": "1"}]}),
        ];

        for case in cases {
            let result = validate_document(&case);
            assert!(
                matches!(result, Err(ValidationError::Schema(_))),
                "expected schema error for {case}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_document_decodes_text() {
        let document = json!({
            "verts": [{"id": "1", "str": "Hi"}, {"id": "2", "str": null}],
            "edges": [{"from": "1", "to": "2"}],
            "extra": true
        });

        let graph = validate_document(&document).unwrap();
        assert_eq!(graph.verts()[0].text(), Some("Hi"));
        assert_eq!(graph.verts()[1].text(), None);
        assert_eq!(graph.edges(), &[Edge::new("1", "2")]);
    }

    #[test]
    fn test_error_codes_and_messages() {
        let err = ValidationError::MultipleRoots(vec![Id::new("1"), Id::new("2")]);
        assert_eq!(err.code(), ErrorCode::E205);
        assert_eq!(err.to_string(), "document has several root vertices: `1`, `2`");
        assert_eq!(ValidationError::NoRoot.code(), ErrorCode::E204);
    }
}

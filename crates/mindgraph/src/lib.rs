//! Mindgraph - markdown and JSON documents to validated mind-map trees.
//!
//! Markdown outlines and flat vertex/edge JSON documents are turned into a
//! single-root [`Tree`](tree::Tree) for a renderer to draw, and a renderer
//! snapshot is turned back into canonical JSON.
//!
//! ```text
//! markdown -> outline -> adapt -> graph -> validate -> build -> tree
//! json ------------------------> graph -> validate -> build -> tree
//! tree -> snapshot -> serialize -> json
//! ```

pub mod adapter;
pub mod build;
pub mod config;
pub mod export;
pub mod serialize;
pub mod validate;

mod debounce;
mod error;
mod links;
mod session;

pub use mindgraph_core::{graph, identifier, outline, rendered, tree};

pub use debounce::Debouncer;
pub use error::MindgraphError;
pub use session::Session;

use log::{debug, info, trace};

use mindgraph_core::{graph::Graph, outline::OutlineNode, tree::Tree};

use config::AppConfig;

/// Runs documents through the mind-map pipeline.
///
/// # Examples
///
/// ```
/// use mindgraph::{Pipeline, config::AppConfig};
///
/// let pipeline = Pipeline::new(AppConfig::default());
///
/// let graph = pipeline
///     .decode_json(r#"{"verts":[{"id":"1","str":"Hi"},{"id":"2"}],"edges":[{"from":"1","to":"2"}]}"#)
///     .expect("Failed to decode");
/// let tree = pipeline.build_tree(&graph).expect("Failed to build");
/// assert_eq!(tree.root_id(), "1");
///
/// let json = pipeline.encode_json(&tree).expect("Failed to encode");
/// assert!(json.starts_with(r#"{"verts":"#));
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    config: AppConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::Parse` for malformed JSON and
    /// `MindgraphError::Validation` for a document that is not a single-root
    /// tree.
    pub fn decode_json(&self, source: &str) -> Result<Graph, MindgraphError> {
        info!(bytes = source.len(); "Decoding JSON document");

        let document = mindgraph_parser::parse_json(source)
            .map_err(|err| MindgraphError::new_parse_error(err, source))?;
        let graph = validate::validate_document(&document)?;

        debug!(verts = graph.verts().len(), edges = graph.edges().len(); "JSON document accepted");
        Ok(graph)
    }

    /// Parse markdown into an outline tree.
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::Parse` with every markdown diagnostic found.
    pub fn parse_outline(&self, source: &str) -> Result<OutlineNode, MindgraphError> {
        info!(bytes = source.len(); "Parsing markdown outline");
        let outline = mindgraph_parser::parse_outline(source, &self.config.markdown().outline_config())
            .map_err(|err| MindgraphError::new_parse_error(err, source))?;
        trace!(outline:?; "Parsed outline");
        Ok(outline)
    }

    /// Turn markdown into a validated graph.
    ///
    /// Returns `Ok(None)` when the markdown has no content, which callers
    /// treat as "keep the current document".
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::Parse` for markdown diagnostics.
    pub fn markdown_to_graph(&self, source: &str) -> Result<Option<Graph>, MindgraphError> {
        let outline = self.parse_outline(source)?;
        let Some(graph) = adapter::adapt(&outline) else {
            return Ok(None);
        };
        validate::validate(&graph)?;
        Ok(Some(graph))
    }

    /// Validate `graph` and build its tree.
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::Validation` if the graph is not a single-root
    /// tree.
    pub fn build_tree(&self, graph: &Graph) -> Result<Tree, MindgraphError> {
        validate::validate(graph)?;
        let tree = build::build(graph)?;
        info!(nodes = tree.len(); "Tree ready");
        Ok(tree)
    }

    /// Encode `tree` as canonical JSON, going through the renderer snapshot.
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::Encode` if encoding fails.
    pub fn encode_json(&self, tree: &Tree) -> Result<String, MindgraphError> {
        let graph = serialize::serialize(&tree.to_rendered());
        Ok(serialize::to_json(&graph)?)
    }

    /// A [`Debouncer`] using the configured quiet interval.
    pub fn debouncer<T>(&self) -> Debouncer<T> {
        Debouncer::new(self.config.pipeline().debounce())
    }
}

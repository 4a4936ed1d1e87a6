//! The loaded mind-map and the operations that change it.
//!
//! A [`Session`] holds at most one [`Tree`]. Every operation either replaces
//! it wholesale or leaves it untouched: a failed load never leaves a partly
//! updated document behind.

use log::{info, warn};

use mindgraph_core::{identifier::Id, tree::Tree};

use crate::{MindgraphError, Pipeline, config::AppConfig};

/// State of a mind-map editor.
#[derive(Debug, Default)]
pub struct Session {
    pipeline: Pipeline,
    tree: Option<Tree>,
}

impl Session {
    /// Create an empty session.
    pub fn new(config: AppConfig) -> Self {
        Self {
            pipeline: Pipeline::new(config),
            tree: None,
        }
    }

    /// The pipeline the session runs documents through.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The current tree, if a document is loaded.
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// Id of the current root, if a document is loaded.
    pub fn root_id(&self) -> Option<Id> {
        self.tree.as_ref().map(Tree::root_id)
    }

    /// Load a JSON document, replacing the current tree.
    ///
    /// # Errors
    ///
    /// Returns the decode or validation error; the current tree is kept.
    pub fn load_json(&mut self, source: &str) -> Result<(), MindgraphError> {
        let tree = self
            .pipeline
            .decode_json(source)
            .and_then(|graph| self.pipeline.build_tree(&graph))
            .inspect_err(|err| warn!(err:%; "JSON document rejected, keeping current tree"))?;
        self.replace(tree);
        Ok(())
    }

    /// Apply an edited markdown text.
    ///
    /// Returns `Ok(false)` when the text has no content; the current tree is
    /// kept in that case.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error; the current tree is kept.
    pub fn apply_markdown(&mut self, source: &str) -> Result<bool, MindgraphError> {
        let graph = self
            .pipeline
            .markdown_to_graph(source)
            .inspect_err(|err| warn!(err:%; "Markdown rejected, keeping current tree"))?;
        let Some(graph) = graph else {
            info!("Markdown is empty, keeping current tree");
            return Ok(false);
        };

        let tree = self.pipeline.build_tree(&graph)?;
        self.replace(tree);
        Ok(true)
    }

    /// Drop the current tree.
    pub fn clear(&mut self) {
        if self.tree.take().is_some() {
            info!("Mind-map cleared");
        }
    }

    /// Encode the current tree as JSON.
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::NoDocument` if nothing is loaded.
    pub fn export_json(&self) -> Result<String, MindgraphError> {
        let tree = self.tree.as_ref().ok_or(MindgraphError::NoDocument)?;
        self.pipeline.encode_json(tree)
    }

    fn replace(&mut self, tree: Tree) {
        info!(root:% = tree.root_id(), nodes = tree.len(); "Mind-map replaced");
        self.tree = Some(tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str =
        r#"{"verts":[{"id":"1","str":"Hi"},{"id":"2","str":"Bye"}],"edges":[{"from":"1","to":"2"}]}"#;

    #[test]
    fn test_load_and_export() {
        let mut session = Session::default();
        assert!(session.tree().is_none());

        session.load_json(HELLO).unwrap();
        assert_eq!(session.root_id(), Some(Id::new("1")));
        assert_eq!(session.export_json().unwrap(), HELLO);
    }

    #[test]
    fn test_failed_load_keeps_tree() {
        let mut session = Session::default();
        session.load_json(HELLO).unwrap();

        let err = session
            .load_json(r#"{"verts":[{"id":"1"},{"id":"1"}],"edges":[]}"#)
            .unwrap_err();
        assert!(matches!(err, MindgraphError::Validation(_)));

        let err = session.load_json("{not json").unwrap_err();
        assert!(matches!(err, MindgraphError::Parse { .. }));

        assert_eq!(session.root_id(), Some(Id::new("1")));
    }

    #[test]
    fn test_apply_markdown() {
        let mut session = Session::default();

        assert!(session.apply_markdown("# Plan\n- a\n- b\n").unwrap());
        let tree = session.tree().unwrap();
        assert_eq!(tree.root_id(), "0");
        assert_eq!(tree.label(Id::new("0")).as_deref(), Some("Plan"));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_empty_markdown_is_a_no_op() {
        let mut session = Session::default();
        session.apply_markdown("# Keep me\n").unwrap();

        assert!(!session.apply_markdown("   \n\n").unwrap());
        let tree = session.tree().unwrap();
        assert_eq!(tree.label(tree.root_id()).as_deref(), Some("Keep me"));
    }

    #[test]
    fn test_bad_markdown_keeps_tree() {
        let mut session = Session::default();
        session.apply_markdown("# Keep me\n").unwrap();

        assert!(session.apply_markdown("# New\n```\nunclosed\n").is_err());
        assert_eq!(session.tree().and_then(|t| t.label(t.root_id())).as_deref(), Some("Keep me"));
    }

    #[test]
    fn test_clear_and_export_without_document() {
        let mut session = Session::default();
        assert!(matches!(session.export_json(), Err(MindgraphError::NoDocument)));

        session.load_json(HELLO).unwrap();
        session.clear();
        assert!(session.tree().is_none());
        assert!(matches!(session.export_json(), Err(MindgraphError::NoDocument)));
    }
}

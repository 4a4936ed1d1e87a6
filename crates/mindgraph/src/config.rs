//! Configuration types for the mindgraph pipeline.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field has a default, so an empty document is a
//! valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`PipelineConfig`] - Timing of the edit -> tree pipeline.
//! - [`ExportConfig`] - File names used when exporting.
//! - [`MarkdownConfig`] - Markdown outline parsing options.
//!
//! # Example
//!
//! ```
//! # use std::time::Duration;
//! # use mindgraph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.pipeline().debounce(), Duration::from_millis(750));
//! assert_eq!(config.export().json_filename(), "知识图谱.json");
//! ```

use std::time::Duration;

use serde::Deserialize;

use mindgraph_parser::OutlineConfig;

/// Quiet interval before an edit is processed, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 750;

/// File name used for JSON exports when none is configured.
pub const DEFAULT_JSON_FILENAME: &str = "知识图谱.json";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pipeline configuration section.
    #[serde(default)]
    pipeline: PipelineConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,

    /// Markdown configuration section.
    #[serde(default)]
    markdown: MarkdownConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(pipeline: PipelineConfig, export: ExportConfig, markdown: MarkdownConfig) -> Self {
        Self {
            pipeline,
            export,
            markdown,
        }
    }

    /// Returns the pipeline configuration.
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the markdown configuration.
    pub fn markdown(&self) -> &MarkdownConfig {
        &self.markdown
    }
}

/// Timing of the edit -> tree pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Quiet interval after the last edit before the pipeline runs.
    debounce_ms: u64,
}

impl PipelineConfig {
    /// Creates a new [`PipelineConfig`] with the given quiet interval.
    pub fn new(debounce_ms: u64) -> Self {
        Self { debounce_ms }
    }

    /// Returns the quiet interval as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// File names used when exporting documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// File name for JSON exports. Falls back to [`DEFAULT_JSON_FILENAME`].
    #[serde(default)]
    json_filename: Option<String>,
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`] overriding the JSON file name.
    pub fn new(json_filename: Option<String>) -> Self {
        Self { json_filename }
    }

    /// Returns the JSON export file name.
    pub fn json_filename(&self) -> &str {
        self.json_filename
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_JSON_FILENAME)
    }
}

/// Markdown outline parsing options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Promote the only top-level entry of a document to be the root.
    unwrap_single_root: bool,
}

impl MarkdownConfig {
    /// Creates a new [`MarkdownConfig`].
    pub fn new(unwrap_single_root: bool) -> Self {
        Self { unwrap_single_root }
    }

    /// Returns whether a single top-level entry becomes the root.
    pub fn unwrap_single_root(&self) -> bool {
        self.unwrap_single_root
    }

    /// Returns the parser options for this configuration.
    pub fn outline_config(&self) -> OutlineConfig {
        OutlineConfig {
            unwrap_single_root: self.unwrap_single_root,
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            unwrap_single_root: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.pipeline().debounce(), Duration::from_millis(750));
        assert_eq!(config.export().json_filename(), DEFAULT_JSON_FILENAME);
        assert!(config.markdown().unwrap_single_root());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [pipeline]
            debounce_ms = 200

            [export]
            json_filename = "map.json"

            [markdown]
            unwrap_single_root = false
            "#,
        )
        .unwrap();

        assert_eq!(config.pipeline().debounce(), Duration::from_millis(200));
        assert_eq!(config.export().json_filename(), "map.json");
        assert!(!config.markdown().outline_config().unwrap_single_root);
    }

    #[test]
    fn test_blank_filename_falls_back() {
        let export = ExportConfig::new(Some("  ".to_string()));
        assert_eq!(export.json_filename(), DEFAULT_JSON_FILENAME);
    }
}

//! # Mindgraph Parser
//!
//! Reads mind-map documents from their two source formats:
//!
//! - **Markdown** - [`parse_outline`] turns headings, lists and paragraphs
//!   into an [`OutlineNode`] tree, and [`strip_inline`] reduces inline
//!   markdown to the plain text shown on a node.
//! - **JSON** - [`parse_json`] decodes the vertex/edge document into a
//!   [`serde_json::Value`] for the validator to check.
//!
//! Problems are reported as [`ParseError`]s carrying span-labeled
//! diagnostics.
//!
//! ## Usage
//!
//! ```
//! # use mindgraph_parser::{parse_outline, OutlineConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "# Plan\n- design\n- build\n  - parser\n";
//!     let outline = parse_outline(source, &OutlineConfig::default())?;
//!
//!     assert_eq!(outline.content(), "Plan");
//!     assert_eq!(outline.children().len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! [`OutlineNode`]: mindgraph_core::outline::OutlineNode

pub mod error;
mod inline;
mod json;
mod lexer;
mod outline;
mod span;

pub use error::ParseError;
pub use inline::strip_inline;
pub use json::parse_json;
pub use outline::{OutlineConfig, parse_outline};
pub use span::Span;

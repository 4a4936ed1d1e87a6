//! Mindgraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! mindgraph pipeline. It includes:
//!
//! - **Identifiers**: Efficient string-interned vertex identifiers ([`identifier::Id`])
//! - **Graph**: The flat vertex/edge wire form of a document ([`graph`] module)
//! - **Outline**: The heading/list hierarchy of a markdown document ([`outline`] module)
//! - **Tree**: The parent-linked tree handed to a renderer ([`tree`] module)
//! - **Rendered**: The node/edge snapshot a renderer hands back ([`rendered`] module)

pub mod graph;
pub mod identifier;
pub mod outline;
pub mod rendered;
pub mod tree;

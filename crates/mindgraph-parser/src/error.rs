//! Error and diagnostic system for mindgraph documents.
//!
//! Every problem found while reading a document is reported as a
//! [`Diagnostic`]: an [`ErrorCode`], a message, labeled source spans and an
//! optional help text. Markdown parsing collects all diagnostics it finds
//! before giving up, so one [`ParseError`] may carry several of them.
//!
//! # Example
//!
//! ```
//! # use mindgraph_parser::error::{Diagnostic, ErrorCode};
//! # use mindgraph_parser::Span;
//!
//! let diag = Diagnostic::error("code block is never closed")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(10..13), "fence opened here")
//!     .with_secondary_label(Span::point(42), "document ends here")
//!     .with_help("add a closing ``` line");
//! assert_eq!(diag.to_string(), "error[E001]: code block is never closed");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;

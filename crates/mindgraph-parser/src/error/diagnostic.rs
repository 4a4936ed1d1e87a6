//! The diagnostic type reported by every stage that reads documents.

use std::fmt;

use crate::{error::ErrorCode, span::Span};

/// Whether a label marks the problem itself or a related place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Primary,
    Secondary,
}

/// A message attached to a span of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    text: String,
    role: Role,
}

impl Label {
    /// A label marking where the problem is.
    pub fn primary(span: Span, text: impl Into<String>) -> Self {
        Self::with_role(span, text, Role::Primary)
    }

    /// A label pointing at a related place, such as the end of input for an
    /// unterminated block.
    pub fn secondary(span: Span, text: impl Into<String>) -> Self {
        Self::with_role(span, text, Role::Secondary)
    }

    fn with_role(span: Span, text: impl Into<String>, role: Role) -> Self {
        Self {
            span,
            text: text.into(),
            role,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.text
    }

    pub fn is_primary(&self) -> bool {
        self.role == Role::Primary
    }
}

/// An error found in a document, with source locations.
///
/// Rendered by the CLI as:
///
/// ```text
/// error[E001]: code block is never closed
///   --> notes.md:4:1
///    |
///  4 | ```rust
///    | ^^^^^^^ fence opened here
///    = help: add a closing ``` line
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    code: Option<ErrorCode>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Start an error diagnostic with no code, labels or help.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were added.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        Self {
            code: Some(code),
            ..self
        }
    }

    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(Label::primary(span, message))
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(Label::secondary(span, message))
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..self
        }
    }

    fn push_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{code}]: {}", self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

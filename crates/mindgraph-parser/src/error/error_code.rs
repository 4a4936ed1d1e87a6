//! Error codes for the mindgraph diagnostic system.
//!
//! Error codes are organized by pipeline stage:
//! - `E0xx` - Markdown outline errors
//! - `E1xx` - JSON decoding errors
//! - `E2xx` - Graph validation errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Markdown Errors (E0xx)
    // =========================================================================
    /// Unterminated fenced code block.
    ///
    /// A ```` ``` ```` or `~~~` fence was opened and the document ended before
    /// a matching closing fence.
    E001,

    /// Unterminated front matter.
    ///
    /// The document starts with `---` but the metadata block is never closed.
    E002,

    /// Unterminated HTML comment.
    ///
    /// A `<!--` comment block has no closing `-->`.
    E003,

    // =========================================================================
    // JSON Errors (E1xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The document text is not valid JSON.
    E100,

    /// Truncated JSON.
    ///
    /// The document ended in the middle of a JSON value.
    E101,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Schema violation: `verts` or `edges` missing or mistyped.
    E200,

    /// Duplicate vertex id.
    E201,

    /// Edge refers to an unknown vertex.
    E202,

    /// Vertex with more than one parent.
    E203,

    /// No root vertex.
    E204,

    /// More than one root vertex.
    E205,

    /// Vertices not reachable from the root.
    E206,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated code block",
            ErrorCode::E002 => "unterminated front matter",
            ErrorCode::E003 => "unterminated comment",
            ErrorCode::E100 => "malformed json",
            ErrorCode::E101 => "truncated json",
            ErrorCode::E200 => "invalid document schema",
            ErrorCode::E201 => "duplicate vertex id",
            ErrorCode::E202 => "dangling edge",
            ErrorCode::E203 => "vertex with several parents",
            ErrorCode::E204 => "no root vertex",
            ErrorCode::E205 => "several root vertices",
            ErrorCode::E206 => "unreachable vertices",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E206.to_string(), "E206");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated code block");
        assert_eq!(ErrorCode::E201.description(), "duplicate vertex id");
    }
}

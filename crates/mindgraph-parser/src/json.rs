//! JSON document decoding.
//!
//! Only the JSON syntax is checked here; the decoded value is handed to the
//! validator, which checks the document shape. Syntax errors are mapped onto
//! source spans so they can be rendered like any other diagnostic.

use log::trace;
use serde_json::{Value, error::Category};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Decode `source` into a JSON value.
///
/// # Errors
///
/// Returns a [`ParseError`] with [`ErrorCode::E101`] if the input ends before
/// the value is complete, and [`ErrorCode::E100`] for any other syntax error.
pub fn parse_json(source: &str) -> Result<Value, ParseError> {
    let value = serde_json::from_str(source).map_err(|err| json_diagnostic(source, &err))?;
    trace!(bytes = source.len(); "JSON document decoded");
    Ok(value)
}

fn json_diagnostic(source: &str, err: &serde_json::Error) -> Diagnostic {
    let text = err.to_string();
    let reason = text.split(" at line ").next().unwrap_or(&text).to_string();

    match err.classify() {
        Category::Eof => Diagnostic::error("JSON document is truncated")
            .with_code(ErrorCode::E101)
            .with_label(Span::point(source.len()), reason)
            .with_help("the document ends before every object and array is closed"),
        _ => {
            let offset = Span::offset_of(source, err.line(), err.column());
            Diagnostic::error("malformed JSON document")
                .with_code(ErrorCode::E100)
                .with_label(char_span(source, offset), reason)
        }
    }
}

/// Span of the character at or just before byte `offset`.
fn char_span(source: &str, offset: usize) -> Span {
    if source.is_empty() {
        return Span::point(0);
    }
    let mut start = offset.min(source.len().saturating_sub(1));
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let end = source[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    Span::new(start..end)
}

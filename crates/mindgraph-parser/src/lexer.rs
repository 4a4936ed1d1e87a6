//! Line lexer for markdown source.
//!
//! Markdown structure is decided line by line, so the lexer splits the source
//! into [`Line`]s and classifies each one as a heading, list item, code
//! fence, thematic break, blank or plain text line. Inline content is left
//! untouched. The public entry point is [`tokenize`].

use winnow::{
    Parser as _,
    combinator::{alt, eof, preceded},
    error::{ContextError, ModalResult},
    stream::AsChar,
    token::{one_of, take_while},
};

use crate::span::Span;

type IResult<O> = ModalResult<O, ContextError>;

/// Columns a tab advances the indentation by.
const TAB_WIDTH: usize = 4;

/// What a single source line contributes to the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Blank,
    Heading { level: usize, text: &'a str },
    ListItem { text: &'a str },
    Fence { marker: char, len: usize },
    ThematicBreak,
    Text(&'a str),
}

/// A classified source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub kind: LineKind<'a>,
    /// Leading whitespace width in columns.
    pub indent: usize,
    /// The line without its terminator.
    pub raw: &'a str,
    /// Span of `raw` in the source.
    pub span: Span,
}

impl Line<'_> {
    /// Returns `true` if this line closes a fence opened with `marker` x `len`.
    pub fn closes_fence(&self, marker: char, len: usize) -> bool {
        let trimmed = self.raw.trim();
        let run = trimmed.chars().take_while(|c| *c == marker).count();
        run >= len && trimmed[run * marker.len_utf8()..].trim().is_empty()
    }
}

/// Parse a line terminator-free remainder as an ATX heading: `## Title ##`.
fn heading<'a>(input: &mut &'a str) -> IResult<LineKind<'a>> {
    let hashes = take_while(1..=6, '#').parse_next(input)?;
    alt((eof.void(), one_of([' ', '\t']).void())).parse_next(input)?;
    let text = strip_closing_hashes(input.trim());
    *input = "";
    Ok(LineKind::Heading {
        level: hashes.len(),
        text,
    })
}

/// Remove an optional closing sequence of `#`s from heading text.
fn strip_closing_hashes(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.is_empty() {
        without
    } else if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

/// Parse a code fence opener or closer: three or more backticks or tildes.
fn fence<'a>(input: &mut &'a str) -> IResult<LineKind<'a>> {
    let run = alt((take_while(3.., '`'), take_while(3.., '~'))).parse_next(input)?;
    let marker = run.chars().next().unwrap_or('`');
    *input = "";
    Ok(LineKind::Fence {
        marker,
        len: run.len(),
    })
}

/// Parse a thematic break: `---`, `* * *`, `___`.
fn thematic_break<'a>(input: &mut &'a str) -> IResult<LineKind<'a>> {
    let marker = one_of(['-', '*', '_']).parse_next(input)?;
    take_while(0.., |c: char| c == marker || c == ' ' || c == '\t')
        .verify(|rest: &str| rest.chars().filter(|c| *c == marker).count() >= 2)
        .parse_next(input)?;
    eof.parse_next(input)?;
    Ok(LineKind::ThematicBreak)
}

/// Parse a bullet (`-`, `*`, `+`) or ordered (`1.`, `1)`) list item.
fn list_item<'a>(input: &mut &'a str) -> IResult<LineKind<'a>> {
    alt((
        one_of(['-', '*', '+']).void(),
        (take_while(1..=9, AsChar::is_dec_digit), one_of(['.', ')'])).void(),
    ))
    .parse_next(input)?;
    alt((eof.void(), one_of([' ', '\t']).void())).parse_next(input)?;
    let text = input.trim();
    *input = "";
    Ok(LineKind::ListItem { text })
}

/// Parse a block quote marker, classifying what follows it.
fn block_quote<'a>(input: &mut &'a str) -> IResult<LineKind<'a>> {
    preceded('>', take_while(0..=1, ' ')).parse_next(input)?;
    let rest = *input;
    *input = "";
    Ok(classify(rest))
}

/// Classify the content of a line after its indentation.
fn classify(rest: &str) -> LineKind<'_> {
    if rest.trim().is_empty() {
        return LineKind::Blank;
    }

    let mut input = rest;
    alt((heading, fence, thematic_break, list_item, block_quote))
        .parse_next(&mut input)
        .unwrap_or(LineKind::Text(rest.trim_end()))
}

/// Width of leading spaces and tabs, and the byte length they occupy.
fn indentation(line: &str) -> (usize, usize) {
    let mut columns = 0;
    let mut bytes = 0;
    for c in line.chars() {
        match c {
            ' ' => columns += 1,
            '\t' => columns += TAB_WIDTH - columns % TAB_WIDTH,
            _ => break,
        }
        bytes += 1;
    }
    (columns, bytes)
}

/// Split `source` into classified lines.
///
/// Both `\n` and `\r\n` terminate lines; a missing final terminator is
/// accepted.
pub(crate) fn tokenize(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for chunk in source.split_inclusive('\n') {
        let raw = chunk
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(chunk);
        let (indent, indent_bytes) = indentation(raw);
        lines.push(Line {
            kind: classify(&raw[indent_bytes..]),
            indent,
            raw,
            span: Span::new(offset..offset + raw.len()),
        });
        offset += chunk.len();
    }

    lines
}

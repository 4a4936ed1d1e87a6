//! Markdown to outline tree conversion.
//!
//! Headings nest by level, list items nest by indentation, and paragraphs
//! become leaves under whatever heading or item encloses them. Nodes are
//! collected into a flat arena while the line stream is walked, then
//! assembled into an [`OutlineNode`] tree at the end.

use log::debug;

use mindgraph_core::outline::OutlineNode;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{self, Line, LineKind},
    span::Span,
};

/// Options for [`parse_outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Replace a blank root that has exactly one child by that child.
    pub unwrap_single_root: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            unwrap_single_root: true,
        }
    }
}

/// Parse markdown `source` into an outline tree.
///
/// The returned root is blank unless the document has a single top-level
/// entry and [`OutlineConfig::unwrap_single_root`] is set. An empty document
/// yields a degenerate root (blank, no children).
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per unterminated code
/// fence, front matter block or HTML comment.
pub fn parse_outline(source: &str, config: &OutlineConfig) -> Result<OutlineNode, ParseError> {
    let lines = lexer::tokenize(source);
    let mut builder = OutlineBuilder::new(source.len());
    builder.run(&lines);
    let outline = builder.finish()?;

    let outline = if config.unwrap_single_root {
        unwrap_single_root(outline)
    } else {
        outline
    };
    debug!(nodes = outline.len(); "Markdown outline parsed");
    Ok(outline)
}

fn unwrap_single_root(outline: OutlineNode) -> OutlineNode {
    if !outline.is_blank() || outline.children().len() != 1 {
        return outline;
    }
    let (_, mut children) = outline.into_parts();
    children.pop().unwrap_or_default()
}

/// Wrap `code` in a backtick run longer than any run it contains, so inline
/// stripping hands it back verbatim.
fn code_span(code: &str) -> String {
    if code.trim().is_empty() {
        return String::new();
    }

    let mut longest = 0;
    let mut current = 0;
    for c in code.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    if code.starts_with('`') || code.ends_with('`') || (code.starts_with(' ') && code.ends_with(' ')) {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

#[derive(Debug, Default)]
struct Draft {
    content: String,
    children: Vec<usize>,
}

/// An open container on the nesting stack.
#[derive(Debug, Clone, Copy)]
enum Frame {
    Heading { level: usize, node: usize },
    Item { indent: usize, node: usize },
}

impl Frame {
    fn node(self) -> usize {
        match self {
            Self::Heading { node, .. } | Self::Item { node, .. } => node,
        }
    }
}

struct OutlineBuilder {
    source_len: usize,
    drafts: Vec<Draft>,
    frames: Vec<Frame>,
    /// Node whose content absorbs following text lines.
    open: Option<usize>,
    diagnostics: DiagnosticCollector,
}

impl OutlineBuilder {
    fn new(source_len: usize) -> Self {
        Self {
            source_len,
            drafts: vec![Draft::default()],
            frames: vec![Frame::Heading { level: 0, node: 0 }],
            open: None,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn run(&mut self, lines: &[Line<'_>]) {
        let mut index = self.skip_front_matter(lines);

        while index < lines.len() {
            let line = lines[index];
            index += 1;

            match line.kind {
                LineKind::Blank | LineKind::ThematicBreak => self.open = None,
                LineKind::Heading { level, text } => self.heading(level, text),
                LineKind::ListItem { text } => self.list_item(line.indent, text),
                LineKind::Fence { marker, len } => {
                    index = self.fenced_code(lines, index, line, marker, len);
                }
                LineKind::Text(text) if text.starts_with("<!--") => {
                    index = self.html_comment(lines, index, line, text);
                }
                LineKind::Text(text) => self.text(line.indent, text),
            }
        }
    }

    fn finish(self) -> Result<OutlineNode, ParseError> {
        self.diagnostics.finish()?;
        let mut drafts = self.drafts;
        Ok(assemble(&mut drafts, 0))
    }

    fn top(&self) -> usize {
        self.frames.last().map_or(0, |frame| frame.node())
    }

    fn add_child(&mut self, parent: usize, content: &str) -> usize {
        let node = self.drafts.len();
        self.drafts.push(Draft {
            content: content.to_string(),
            children: Vec::new(),
        });
        self.drafts[parent].children.push(node);
        node
    }

    fn pop_items(&mut self) {
        while matches!(self.frames.last(), Some(Frame::Item { .. })) {
            self.frames.pop();
        }
    }

    /// Parent for a paragraph or code block at `indent`: the innermost list
    /// item it is indented under, or the enclosing heading.
    fn block_parent(&mut self, indent: usize) -> usize {
        while let Some(Frame::Item { indent: item, .. }) = self.frames.last() {
            if indent > *item {
                break;
            }
            self.frames.pop();
        }
        self.top()
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.open = None;
        self.pop_items();
        while let Some(Frame::Heading { level: open, .. }) = self.frames.last() {
            if *open < level {
                break;
            }
            self.frames.pop();
        }
        let parent = self.top();
        let node = self.add_child(parent, text);
        self.frames.push(Frame::Heading { level, node });
    }

    fn list_item(&mut self, indent: usize, text: &str) {
        while let Some(Frame::Item { indent: open, .. }) = self.frames.last() {
            if *open < indent {
                break;
            }
            self.frames.pop();
        }
        let parent = self.top();
        let node = self.add_child(parent, text);
        self.frames.push(Frame::Item { indent, node });
        self.open = Some(node);
    }

    fn text(&mut self, indent: usize, text: &str) {
        let text = text.trim();
        if let Some(node) = self.open {
            let content = &mut self.drafts[node].content;
            if !content.is_empty() {
                content.push(' ');
            }
            content.push_str(text);
            return;
        }

        let parent = self.block_parent(indent);
        self.open = Some(self.add_child(parent, text));
    }

    fn skip_front_matter(&mut self, lines: &[Line<'_>]) -> usize {
        let Some(first) = lines.first() else {
            return 0;
        };
        if first.raw.trim_end() != "---" {
            return 0;
        }

        let closing = lines[1..]
            .iter()
            .position(|line| matches!(line.raw.trim_end(), "---" | "..."));
        match closing {
            Some(pos) => pos + 2,
            None => {
                self.diagnostics.emit(
                    Diagnostic::error("front matter is never closed")
                        .with_code(ErrorCode::E002)
                        .with_label(first.span, "front matter starts here")
                        .with_secondary_label(Span::point(self.source_len), "document ends here")
                        .with_help("add a closing `---` line"),
                );
                lines.len()
            }
        }
    }

    fn html_comment(&mut self, lines: &[Line<'_>], next: usize, line: Line<'_>, text: &str) -> usize {
        if text[4..].contains("-->") {
            return next;
        }

        match lines[next..].iter().position(|line| line.raw.contains("-->")) {
            Some(pos) => next + pos + 1,
            None => {
                self.diagnostics.emit(
                    Diagnostic::error("HTML comment is never closed")
                        .with_code(ErrorCode::E003)
                        .with_label(line.span, "comment opened here")
                        .with_secondary_label(Span::point(self.source_len), "document ends here")
                        .with_help("close the comment with `-->`"),
                );
                lines.len()
            }
        }
    }

    fn fenced_code(
        &mut self,
        lines: &[Line<'_>],
        next: usize,
        opener: Line<'_>,
        marker: char,
        len: usize,
    ) -> usize {
        self.open = None;

        let Some(pos) = lines[next..]
            .iter()
            .position(|line| line.closes_fence(marker, len))
        else {
            let closer = marker.to_string().repeat(len);
            self.diagnostics.emit(
                Diagnostic::error("code block is never closed")
                    .with_code(ErrorCode::E001)
                    .with_label(opener.span, "code block opened here")
                    .with_secondary_label(Span::point(self.source_len), "document ends here")
                    .with_help(format!("add a closing `{closer}` line")),
            );
            return lines.len();
        };

        let code = lines[next..next + pos]
            .iter()
            .map(|line| dedent(line.raw, opener.indent))
            .collect::<Vec<_>>()
            .join("\n");

        let parent = self.block_parent(opener.indent);
        self.add_child(parent, &code_span(&code));
        next + pos + 1
    }
}

/// Remove up to `columns` leading spaces from a code line.
fn dedent(line: &str, columns: usize) -> &str {
    let strip = line
        .bytes()
        .take(columns)
        .take_while(|b| *b == b' ')
        .count();
    &line[strip..]
}

fn assemble(drafts: &mut [Draft], index: usize) -> OutlineNode {
    let content = std::mem::take(&mut drafts[index].content);
    let children = std::mem::take(&mut drafts[index].children);
    let children = children
        .into_iter()
        .map(|child| assemble(drafts, child))
        .collect();
    OutlineNode::new(content, children)
}

//! Rendering of [`MindgraphError`]s as miette reports.
//!
//! A parse error becomes one report per diagnostic, each pointing into the
//! document text. Every other error becomes a single report without source.

use std::fmt;

use log::error;
use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use mindgraph::MindgraphError;
use mindgraph_parser::{Span, error::Diagnostic};

/// One renderable report.
#[derive(Debug)]
pub enum Report<'a> {
    /// A parser diagnostic together with the document it refers to.
    Located { diag: &'a Diagnostic, src: &'a str },
    /// An error with no position in a document.
    Plain(&'a MindgraphError),
}

impl Report<'_> {
    /// Category code for errors that do not come with an [`ErrorCode`](mindgraph_parser::error::ErrorCode).
    fn plain_code(err: &MindgraphError) -> Option<&'static str> {
        match err {
            MindgraphError::Io(_) => Some("mindgraph::io"),
            MindgraphError::Parse { .. } => None,
            MindgraphError::Validation(err) => Some(err.code().as_str()),
            MindgraphError::Encode(_) => Some("mindgraph::encode"),
            MindgraphError::NoDocument => Some("mindgraph::no_document"),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Located { diag, .. } => f.write_str(diag.message()),
            Report::Plain(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Report::Located { .. } => None,
            Report::Plain(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: Box<dyn fmt::Display> = match self {
            Report::Located { diag, .. } => Box::new(diag.code()?),
            Report::Plain(err) => Box::new(Self::plain_code(err)?),
        };
        Some(code)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Report::Located { diag, .. } => {
                diag.help().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
            }
            Report::Plain(MindgraphError::Validation(err)) => Some(Box::new(err.code().description())),
            Report::Plain(MindgraphError::NoDocument) => {
                Some(Box::new("the document has no headings, list items or text"))
            }
            Report::Plain(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Report::Located { src, .. } => Some(src as &dyn miette::SourceCode),
            Report::Plain(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Report::Located { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split `err` into the reports to render, one per parse diagnostic.
pub fn reports(err: &MindgraphError) -> Vec<Report<'_>> {
    match err {
        MindgraphError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| Report::Located { diag, src })
            .collect(),
        other => vec![Report::Plain(other)],
    }
}

/// Render every report of `err` and log it at error level.
pub fn report(err: &MindgraphError) {
    let handler = GraphicalReportHandler::new();

    for report in reports(err) {
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, &report).is_err() {
            rendered = report.to_string();
        }
        error!("{rendered}");
    }
}

#[cfg(test)]
mod tests {
    use mindgraph::validate::ValidationError;
    use mindgraph_parser::error::{ErrorCode, ParseError};

    use super::*;

    fn unclosed_fence() -> MindgraphError {
        let src = "# Notes\n```\ncode\n";
        let diags = vec![
            Diagnostic::error("code block is never closed")
                .with_code(ErrorCode::E001)
                .with_label(Span::new(8..11), "fence opened here")
                .with_secondary_label(Span::point(src.len()), "document ends here")
                .with_help("add a closing ``` line"),
            Diagnostic::error("comment is never closed").with_code(ErrorCode::E003),
        ];
        MindgraphError::new_parse_error(ParseError::from(diags), src)
    }

    #[test]
    fn test_parse_error_gives_one_report_per_diagnostic() {
        let err = unclosed_fence();
        let reports = reports(&err);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].to_string(), "code block is never closed");
        assert_eq!(reports[0].code().unwrap().to_string(), "E001");
        assert_eq!(reports[1].code().unwrap().to_string(), "E003");
        assert!(reports[0].source_code().is_some());
    }

    #[test]
    fn test_labels_keep_primary_flag() {
        let err = unclosed_fence();
        let reports = reports(&err);

        let labels: Vec<_> = reports[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("fence opened here"));
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 8);
        assert!(!labels[1].primary());

        assert!(reports[1].labels().is_none());
    }

    #[test]
    fn test_validation_error_uses_its_code() {
        let err = MindgraphError::Validation(ValidationError::NoRoot);
        let reports = reports(&err);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].to_string(), "Invalid document: document has no root vertex");
        assert_eq!(reports[0].code().unwrap().to_string(), "E204");
        assert_eq!(reports[0].help().unwrap().to_string(), "no root vertex");
        assert!(reports[0].source_code().is_none());
    }

    #[test]
    fn test_other_errors_get_category_codes() {
        let io = MindgraphError::Io(std::io::Error::other("disk full"));
        assert_eq!(reports(&io)[0].code().unwrap().to_string(), "mindgraph::io");

        let none = MindgraphError::NoDocument;
        assert_eq!(reports(&none)[0].code().unwrap().to_string(), "mindgraph::no_document");
    }

    #[test]
    fn test_rendered_report_shows_snippet() {
        let err = unclosed_fence();
        let reports = reports(&err);

        let mut rendered = String::new();
        GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut rendered, &reports[0])
            .unwrap();
        assert!(rendered.contains("fence opened here"));
        assert!(rendered.contains("E001"));
    }
}

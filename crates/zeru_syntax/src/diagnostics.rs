//! Diagnostics produced by the scanner and parser.
//!
//! A [`CompileError`] is plain data (message, span, kind, notes, hints). It implements [`miette::Diagnostic`] so a
//! driver can render it against the source with `miette::Report`, and [`LineIndex`] converts byte offsets to
//! 1-based line/column pairs for plain-text output.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span, kind: ErrorKind) -> Self {
        Self {
            message,
            span,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Lexical)
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Syntax)
    }

    pub fn cancelled(span: Span) -> Self {
        Self::new("parsing cancelled".to_string(), span, ErrorKind::Cancelled)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad character, literal, or comment in the scanner.
    Lexical,
    /// Expected token or production not found.
    Syntax,
    /// The caller asked the parser to stop early.
    Cancelled,
}

impl ErrorKind {
    /// Stable diagnostic code, shown by graphical reports.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "zeru::lexical",
            ErrorKind::Syntax => "zeru::syntax",
            ErrorKind::Cancelled => "zeru::cancelled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.notes.is_empty() && self.hints.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .notes
            .iter()
            .map(|n| format!("note: {}", n))
            .chain(self.hints.iter().cloned())
            .collect();
        Some(Box::new(lines.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = SourceSpan::from((self.span.start, self.span.len()));
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.kind.to_string()),
            span,
        ))))
    }
}

/// Sort diagnostics by source position, keeping the emission order for ties.
pub fn sort_by_position(errors: &mut [CompileError]) {
    errors.sort_by_key(|e| (e.span.start, e.span.end));
}

// ============================================================================
// Line/column lookup
// ============================================================================

/// Byte-offset to line/column index for one source text.
///
/// Lines and columns are 1-based; columns count chars, not bytes.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { source, line_starts }
    }

    /// Return `(line, column)` for a byte offset. Offsets past the end clamp to the end of the source.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        (line, column + 1)
    }

    /// Return the text of a 1-based line, without its newline.
    pub fn line_text(&self, line: usize) -> &'a str {
        let Some(&start) = self.line_starts.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        self.source[start..end].trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col() {
        let source = "line 1\nline 2\nline 3";
        let index = LineIndex::new(source);

        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(7), (2, 1));
        assert_eq!(index.line_col(10), (2, 4));
        assert_eq!(index.line_col(source.len()), (3, 7));
        assert_eq!(index.line_col(999), (3, 7));
        assert_eq!(index.line_text(2), "line 2");
        assert_eq!(index.line_text(4), "");
    }

    #[test]
    fn test_columns_count_chars() {
        let index = LineIndex::new("var é = 1;");
        // `=` sits after a two-byte char.
        assert_eq!(index.line_col(7), (1, 7));
    }

    #[test]
    fn test_diagnostic_metadata() {
        let err = CompileError::syntax("Expected ';'".to_string(), Span::new(4, 5))
            .with_note("statements end with ';'")
            .with_hint("add ';' here");
        assert_eq!(err.to_string(), "Expected ';'");
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("zeru::syntax"));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("note: statements end with ';'"));
        assert!(help.contains("add ';' here"));
        let labels: Vec<LabeledSpan> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_sort_by_position() {
        let mut errors = vec![
            CompileError::syntax("b".to_string(), Span::new(9, 10)),
            CompileError::lexical("a".to_string(), Span::new(2, 3)),
        ];
        sort_by_position(&mut errors);
        assert_eq!(errors[0].message, "a");
    }
}

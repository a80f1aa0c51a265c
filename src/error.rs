//! Error types for pattern scanning

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in pattern text
pub type Span = std::ops::Range<usize>;

/// Structural pattern errors.
///
/// A pattern that fails to scan produces no usable parse result; the caller
/// must fix the pattern. Resolution misses are not errors (they degrade to
/// the empty string during argument building).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A single quote with no matching closing quote
    #[error("unterminated quote at {}..{}", span.start, span.end)]
    UnterminatedQuote { span: Span },

    /// End of input inside a placeholder
    #[error("unterminated placeholder at {}..{}", span.start, span.end)]
    UnterminatedPlaceholder { span: Span },

    /// A closing brace with no placeholder open
    #[error("unmatched '}}' at {}..{}", span.start, span.end)]
    UnmatchedBrace { span: Span },
}

impl ParseError {
    /// The byte range of the offending pattern text
    pub fn span(&self) -> &Span {
        match self {
            ParseError::UnterminatedQuote { span }
            | ParseError::UnterminatedPlaceholder { span }
            | ParseError::UnmatchedBrace { span } => span,
        }
    }

    /// Format the error with pattern context using ariadne
    pub fn format(&self, pattern: &str, filename: &str) -> String {
        let span = self.span().clone();
        let mut buf = Vec::new();

        Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(pattern)), &mut buf)
            .unwrap();

        String::from_utf8(buf).unwrap()
    }
}

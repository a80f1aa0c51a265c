//! The rendering boundary: a pluggable formatting engine
//!
//! The scanner only prepares a positional pattern and its ordered
//! arguments; turning those into a rendered string belongs to a
//! [`MessageRenderer`]. The bundled [`BasicRenderer`] does plain positional
//! substitution with the pattern's quote semantics and refuses
//! format-type styles; locale-specific formatting stays in whatever engine
//! the caller plugs in.

use thiserror::Error;

use crate::error::ParseError;
use crate::locale::Locale;
use crate::scanner::lexer::{lex, Token};
use crate::scanner::placeholder_extent;
use crate::value::Value;

/// Errors raised by a formatting engine. Propagated unchanged through the
/// format facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder index with no matching argument
    #[error("no argument for placeholder index {index}")]
    MissingArgument { index: usize },

    /// A placeholder whose leading token is not a decimal index
    #[error("invalid placeholder index '{text}'")]
    InvalidIndex { text: String },

    /// A format-type/style residual this engine does not interpret
    #[error("unsupported format style '{style}'")]
    UnsupportedStyle { style: String },

    /// The positional pattern itself failed to scan
    #[error(transparent)]
    Pattern(#[from] ParseError),
}

/// A locale-aware engine that renders a positional pattern against an
/// ordered argument sequence.
pub trait MessageRenderer {
    /// Render `pattern` with `arguments` under `locale`
    fn render(
        &self,
        pattern: &str,
        arguments: &[Value],
        locale: &Locale,
    ) -> Result<String, RenderError>;
}

/// Positional substitution without locale-specific styles.
///
/// Quote handling follows the pattern syntax: a quoted run loses its outer
/// quotes, `''` renders as one literal quote, and argument values render
/// through their `Display` form.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicRenderer;

impl MessageRenderer for BasicRenderer {
    fn render(
        &self,
        pattern: &str,
        arguments: &[Value],
        _locale: &Locale,
    ) -> Result<String, RenderError> {
        let mut output = String::with_capacity(pattern.len());
        let mut tokens = lex(pattern);

        while let Some((token, span)) = tokens.next() {
            let token = token.map_err(|()| ParseError::UnterminatedQuote {
                span: span.start..pattern.len(),
            })?;
            match token {
                Token::Quoted => {
                    let run = &pattern[span.start + 1..span.end - 1];
                    if run.is_empty() {
                        output.push('\'');
                    } else {
                        output.push_str(run);
                    }
                }
                Token::BraceOpen => {
                    let open = span.start;
                    let (name_end, close) = placeholder_extent(pattern, open, &mut tokens)?;
                    substitute(pattern, open, name_end, close, arguments, &mut output)?;
                }
                Token::BraceClose => {
                    return Err(ParseError::UnmatchedBrace { span }.into());
                }
                Token::Comma | Token::Text => output.push_str(&pattern[span]),
            }
        }

        Ok(output)
    }
}

fn substitute(
    pattern: &str,
    open: usize,
    name_end: Option<usize>,
    close: usize,
    arguments: &[Value],
    output: &mut String,
) -> Result<(), RenderError> {
    let name_end = name_end.unwrap_or(close);
    let index_text = &pattern[open + 1..name_end];
    let index: usize = index_text.parse().map_err(|_| RenderError::InvalidIndex {
        text: index_text.to_string(),
    })?;

    if name_end < close {
        return Err(RenderError::UnsupportedStyle {
            style: pattern[name_end + 1..close].to_string(),
        });
    }

    let value = arguments
        .get(index)
        .ok_or(RenderError::MissingArgument { index })?;
    output.push_str(&value.to_string());
    Ok(())
}

//! The scanning state machine over the lexed token stream
//!
//! Literal and quoted runs are copied into the output byte-for-byte; only
//! the leading name token of each placeholder is rewritten. Brace depth is
//! tracked inside placeholders so nested sub-patterns in a residual do not
//! close the placeholder early.

use logos::SpannedIter;

use crate::error::ParseError;
use crate::scanner::lexer::{lex, Token};
use crate::scanner::pattern::{ParseMode, ParsedPattern};
use crate::table::NameTableBuilder;

/// Scan `pattern`, rewriting placeholder names to dense indices in
/// [`ParseMode::Named`] and passing placeholders through untouched in
/// [`ParseMode::Positional`].
///
/// A pattern without placeholders comes back identical to the input in
/// either mode, with an empty name table.
pub fn scan(pattern: &str, mode: ParseMode) -> Result<ParsedPattern, ParseError> {
    let mut output = String::with_capacity(pattern.len());
    let mut names = NameTableBuilder::new();
    let mut tokens = lex(pattern);

    while let Some((token, span)) = tokens.next() {
        let token = token.map_err(|()| ParseError::UnterminatedQuote {
            span: span.start..pattern.len(),
        })?;
        match token {
            Token::BraceOpen => {
                let open = span.start;
                let (name_end, close) = placeholder_extent(pattern, open, &mut tokens)?;
                match mode {
                    // already positional; the whole placeholder passes
                    // through byte-for-byte
                    ParseMode::Positional => output.push_str(&pattern[open..=close]),
                    ParseMode::Named => {
                        let name_end = name_end.unwrap_or(close);
                        let index = names.intern(&pattern[open + 1..name_end]);
                        output.push('{');
                        output.push_str(&index.to_string());
                        // the residual (first unquoted comma onward) is
                        // opaque and copied verbatim
                        output.push_str(&pattern[name_end..close]);
                        output.push('}');
                    }
                }
            }
            Token::BraceClose => {
                return Err(ParseError::UnmatchedBrace { span });
            }
            // literal text, commas and quoted runs outside placeholders
            // pass through verbatim, braces inside quotes included
            Token::Comma | Token::Quoted | Token::Text => output.push_str(&pattern[span]),
        }
    }

    Ok(ParsedPattern::new(output, names.freeze(), mode))
}

/// Walk tokens from just past an opening brace at `open` to its matching
/// close, tracking brace depth.
///
/// Returns the byte offset of the first depth-1 comma (the end of the name
/// region, if a residual follows) and of the closing brace. Callers slice
/// the source with these offsets, which keeps the name region and residual
/// byte-for-byte faithful.
pub(crate) fn placeholder_extent(
    pattern: &str,
    open: usize,
    tokens: &mut SpannedIter<'_, Token>,
) -> Result<(Option<usize>, usize), ParseError> {
    let mut depth = 1usize;
    let mut name_end = None;

    while let Some((token, span)) = tokens.next() {
        let token = token.map_err(|()| ParseError::UnterminatedQuote {
            span: span.start..pattern.len(),
        })?;
        match token {
            Token::BraceOpen => depth += 1,
            Token::BraceClose => {
                depth -= 1;
                if depth == 0 {
                    return Ok((name_end, span.start));
                }
            }
            Token::Comma if depth == 1 && name_end.is_none() => {
                name_end = Some(span.start);
            }
            // later commas, quoted runs and text belong to the name region
            // or residual; both are recovered by slicing the source
            Token::Comma | Token::Quoted | Token::Text => {}
        }
    }

    Err(ParseError::UnterminatedPlaceholder {
        span: open..pattern.len(),
    })
}

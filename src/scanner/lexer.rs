//! Lexer for message patterns using logos

use logos::Logos;

/// Byte range in pattern text
pub type Span = std::ops::Range<usize>;

/// The token classes of a message pattern.
///
/// There are no skip patterns: whitespace inside a pattern is literal text,
/// and every input byte belongs to exactly one token. A single quote that
/// never finds its closing quote matches no rule and surfaces as a lexer
/// error, which the scanner reports as an unterminated quote.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    /// A complete quoted run, outer quotes included. `''` is an empty run.
    #[regex(r"'[^']*'")]
    Quoted,

    /// A run of plain text between delimiters.
    #[regex(r"[^{},']+")]
    Text,
}

/// Lex a pattern into tokens with spans.
///
/// Lexer errors are kept in the stream; the scanner turns them into
/// structural parse errors instead of dropping them.
pub fn lex(pattern: &str) -> logos::SpannedIter<'_, Token> {
    Token::lexer(pattern).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t.expect("should lex")).collect()
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            tokens("{},"),
            vec![Token::BraceOpen, Token::BraceClose, Token::Comma]
        );
    }

    #[test]
    fn test_text_run_keeps_whitespace() {
        let spans: Vec<_> = lex("a b  c").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..6]);
    }

    #[test]
    fn test_quoted_run_is_one_token() {
        assert_eq!(tokens("'{b}'"), vec![Token::Quoted]);
    }

    #[test]
    fn test_doubled_quote_is_empty_run() {
        assert_eq!(tokens("''"), vec![Token::Quoted]);
    }

    #[test]
    fn test_dotted_name_is_plain_text() {
        assert_eq!(
            tokens("{bean.s1}"),
            vec![Token::BraceOpen, Token::Text, Token::BraceClose]
        );
    }

    #[test]
    fn test_placeholder_with_style() {
        assert_eq!(
            tokens("{x,y,z}"),
            vec![
                Token::BraceOpen,
                Token::Text,
                Token::Comma,
                Token::Text,
                Token::Comma,
                Token::Text,
                Token::BraceClose,
            ]
        );
    }

    #[test]
    fn test_lone_quote_is_an_error() {
        let results: Vec<_> = lex("'abc").map(|(t, _)| t).collect();
        assert!(results.iter().any(|t| t.is_err()));
    }
}

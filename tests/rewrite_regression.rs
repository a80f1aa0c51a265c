//! Rewrite regression tests
//!
//! Inline snapshots pin the exact rewritten output for patterns that have
//! caused trouble before: quote runs next to placeholders, residual
//! styles, and nested sub-patterns in residuals.

use named_format::{scan, ParseMode};

fn rewrite(pattern: &str) -> String {
    scan(pattern, ParseMode::Named)
        .expect("should scan")
        .text()
        .to_string()
}

#[test]
fn test_quoted_run_between_placeholders() {
    insta::assert_snapshot!(rewrite("{first} '{literal}' {second}"), @"{0} '{literal}' {1}");
}

#[test]
fn test_doubled_quote_next_to_placeholder() {
    insta::assert_snapshot!(rewrite("it''s {owner}''s"), @"it''s {0}''s");
}

#[test]
fn test_residual_with_quoted_style_text() {
    insta::assert_snapshot!(rewrite("{when,date,'on' d}"), @"{0,date,'on' d}");
}

#[test]
fn test_nested_subpattern_in_residual() {
    insta::assert_snapshot!(
        rewrite("{count,choice,0#none|1#{count} item}"),
        @"{0,choice,0#none|1#{count} item}"
    );
}

#[test]
fn test_interleaved_duplicates_and_styles() {
    insta::assert_snapshot!(
        rewrite("{a} {b,x,y} {a} {c} {b}"),
        @"{0} {1,x,y} {0} {2} {1}"
    );
}

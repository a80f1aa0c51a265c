//! Integration tests for pattern rewriting in both modes

use pretty_assertions::assert_eq;

use named_format::{scan, ParseMode};

/// Named-mode corpus: input pattern and its positional rewrite. A repeated
/// name reuses its index rather than claiming a new one.
const NAMED_PATTERNS: &[(&str, &str)] = &[
    ("", ""),
    ("a", "a"),
    ("'a'", "'a'"),
    ("{a}", "{0}"),
    ("{a} {a}", "{0} {0}"),
    ("{a} {b}", "{0} {1}"),
    ("{a} '{b}'", "{0} '{b}'"),
    ("{a} x {b} {x,y,z}", "{0} x {1} {2,y,z}"),
];

#[test]
fn test_named_mode_rewrites() {
    for (input, expected) in NAMED_PATTERNS {
        let parsed = scan(input, ParseMode::Named).expect("should scan");
        assert_eq!(parsed.text(), *expected, "pattern: {:?}", input);
    }
}

/// Positional-mode corpus: every pattern passes through unchanged.
const POSITIONAL_PATTERNS: &[&str] = &[
    "",
    "a",
    "'a'",
    "{0}",
    "{0} {0}",
    "{0} {1}",
    "{1} '{0}'",
    "{0,x,y}",
];

#[test]
fn test_positional_mode_is_pass_through() {
    for input in POSITIONAL_PATTERNS {
        let parsed = scan(input, ParseMode::Positional).expect("should scan");
        assert_eq!(parsed.text(), *input, "pattern: {:?}", input);
        assert!(parsed.names().is_empty(), "pattern: {:?}", input);
    }
}

#[test]
fn test_placeholder_free_patterns_round_trip_in_both_modes() {
    for input in ["", "plain text", "a, b", "'{not a placeholder}'"] {
        for mode in [ParseMode::Named, ParseMode::Positional] {
            let parsed = scan(input, mode).expect("should scan");
            assert_eq!(parsed.text(), input);
            assert!(parsed.names().is_empty());
        }
    }
}

#[test]
fn test_dotted_names_rewrite_like_plain_names() {
    let parsed = scan("{bean.s1} {bean.s2} ({bean.value}) {locale.language}", ParseMode::Named)
        .expect("should scan");
    assert_eq!(parsed.text(), "{0} {1} ({2}) {3}");
    assert_eq!(parsed.names().index_of("bean.s1"), Some(0));
    assert_eq!(parsed.names().index_of("locale.language"), Some(3));
}

#[test]
fn test_structural_errors_surface_in_both_modes() {
    for input in ["{a", "'abc", "{a,'x", "oops}"] {
        for mode in [ParseMode::Named, ParseMode::Positional] {
            assert!(scan(input, mode).is_err(), "pattern: {:?}", input);
        }
    }
}

//! named-format - positional rewriting for named message patterns
//!
//! This library rewrites message patterns that reference parameters by name
//! (`Hello {user}`) into patterns that reference them by position
//! (`Hello {0}`), and resolves the ordered argument list from a set of
//! named values, navigating dotted property paths (`{bean.field}`) through
//! nested objects.
//!
//! # Example
//!
//! ```rust
//! use named_format::{format, Locale, ParamSet, Value};
//!
//! let mut params = ParamSet::new();
//! params.insert("user".to_string(), Value::from("world"));
//!
//! let message = format("Hello {user}", &params, &Locale::new("en", "US")).unwrap();
//! assert_eq!(message, "Hello world");
//! ```

pub mod engine;
pub mod error;
pub mod locale;
pub mod params;
pub mod path;
pub mod scanner;
pub mod table;
pub mod value;

pub use engine::{BasicRenderer, MessageRenderer, RenderError};
pub use error::ParseError;
pub use locale::Locale;
pub use scanner::{scan, ParseMode, ParsedPattern};
pub use table::NameTable;
pub use value::{ParamSet, PropertyRead, Value};

use thiserror::Error;

/// Errors that can occur during the full format pipeline
#[derive(Debug, Error)]
pub enum FormatError {
    /// Error during pattern scanning
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from the rendering engine
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Rewrite `pattern`, resolve `params`, and render in one call.
///
/// This is the one-shot entry point: scan in named mode, build the ordered
/// arguments (no fallback set), and hand the positional pattern, arguments,
/// and `locale` to the bundled [`BasicRenderer`].
///
/// # Example
///
/// ```rust
/// use named_format::{format, Locale, ParamSet, Value};
///
/// let mut params = ParamSet::new();
/// params.insert("count".to_string(), Value::Int(3));
///
/// let message = format("({count})", &params, &Locale::new("en", "US")).unwrap();
/// assert_eq!(message, "(3)");
/// ```
pub fn format(pattern: &str, params: &ParamSet, locale: &Locale) -> Result<String, FormatError> {
    format_with(pattern, params, locale, &BasicRenderer)
}

/// Like [`format`], rendering through a caller-supplied engine
pub fn format_with<R: MessageRenderer>(
    pattern: &str,
    params: &ParamSet,
    locale: &Locale,
    renderer: &R,
) -> Result<String, FormatError> {
    let parsed = scan(pattern, ParseMode::Named)?;
    let arguments = parsed.arguments(params);
    let rendered = renderer.render(parsed.text(), &arguments, locale)?;
    Ok(rendered)
}

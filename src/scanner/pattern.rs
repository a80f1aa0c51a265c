//! Parse results: the rewritten pattern and its name table

use crate::path;
use crate::table::NameTable;
use crate::value::{ParamSet, Value};

/// Whether placeholders reference parameters by name or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// `{user}`-style placeholders, rewritten to dense positional indices
    #[default]
    Named,
    /// `{0}`-style placeholders, passed through untouched
    Positional,
}

/// The outcome of scanning one pattern.
///
/// Immutable once produced: safe to share across threads and to reuse
/// against any number of parameter sets.
#[derive(Debug, Clone)]
pub struct ParsedPattern {
    text: String,
    names: NameTable,
    mode: ParseMode,
}

impl ParsedPattern {
    pub(crate) fn new(text: String, names: NameTable, mode: ParseMode) -> Self {
        Self { text, names, mode }
    }

    /// The rewritten, positional pattern text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The mode this pattern was scanned in
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Names and their assigned indices (empty for positional parses)
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Ordered arguments for `params`.
    ///
    /// Slot `i` holds the value the name assigned index `i` resolves to, or
    /// the empty string when resolution misses. Positional parses collect
    /// no names, so the result is empty; in that mode the caller supplies
    /// its own argument array to the engine.
    pub fn arguments(&self, params: &ParamSet) -> Vec<Value> {
        self.build(params, None)
    }

    /// Like [`arguments`](Self::arguments), consulting `fallback` for names
    /// missing from `params`.
    pub fn arguments_or(&self, params: &ParamSet, fallback: &ParamSet) -> Vec<Value> {
        self.build(params, Some(fallback))
    }

    fn build(&self, params: &ParamSet, fallback: Option<&ParamSet>) -> Vec<Value> {
        let mut values = vec![Value::empty(); self.names.len()];
        for (name, index) in self.names.iter() {
            values[index] = path::evaluate(name, params, fallback);
        }
        values
    }
}

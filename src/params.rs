//! Parameter sets loaded from TOML files
//!
//! The CLI reads its named values from a TOML document. Tables nest, so a
//! dotted path in the pattern navigates straight into the file's structure.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::value::{ParamSet, Value};

/// Errors that can occur when loading a parameter file
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Failed to read parameter file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse parameter TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// TOML structure for deserializing parameter files
#[derive(Deserialize)]
struct TomlParams {
    values: toml::Table,
}

/// Load a parameter set from a TOML file.
///
/// Expected shape:
///
/// ```toml
/// [values]
/// user = "world"
///
/// [values.bean]
/// s1 = "abc"
/// ```
pub fn from_file(path: &Path) -> Result<ParamSet, ParamsError> {
    let content = std::fs::read_to_string(path)?;
    from_str(&content)
}

/// Load a parameter set from a TOML string
pub fn from_str(content: &str) -> Result<ParamSet, ParamsError> {
    let parsed: TomlParams = toml::from_str(content)?;
    Ok(convert_table(parsed.values))
}

fn convert_table(table: toml::Table) -> ParamSet {
    table
        .into_iter()
        .map(|(key, value)| (key, convert(value)))
        .collect()
}

fn convert(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::Str(text),
        toml::Value::Integer(number) => Value::Int(number),
        toml::Value::Float(number) => Value::Float(number),
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(stamp) => Value::Str(stamp.to_string()),
        toml::Value::Array(items) => Value::List(items.into_iter().map(convert).collect()),
        toml::Value::Table(table) => Value::Map(convert_table(table)),
    }
}

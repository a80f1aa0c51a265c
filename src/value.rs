//! Parameter values and the property accessor protocol

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A set of named parameter values, supplied by the caller per argument
/// build. Never mutated by this crate.
pub type ParamSet = HashMap<String, Value>;

/// Read-only property access over a caller-supplied object.
///
/// Implementing this trait is how arbitrary application types take part in
/// dotted-path navigation (`{bean.field}`): `property` plays the role of a
/// conventional zero-argument reader, returning `None` for names the type
/// does not expose. Implementations must not mutate the object.
pub trait PropertyRead: fmt::Debug + Send + Sync {
    /// The value of the property `name`, if the object exposes one
    fn property(&self, name: &str) -> Option<Value>;
}

/// A parameter value.
#[derive(Debug, Clone)]
pub enum Value {
    /// An explicitly absent value; resolves like a missing name
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A sequence; numeric path segments index into it
    List(Vec<Value>),
    /// A key-based container; path segments look keys up directly
    Map(HashMap<String, Value>),
    /// An opaque object navigated through [`PropertyRead`]
    Object(Arc<dyn PropertyRead>),
}

impl Value {
    /// The empty-string sentinel produced for every resolution miss
    pub(crate) fn empty() -> Self {
        Value::Str(String::new())
    }

    /// Accessor protocol: container lookup first, then the object probe.
    ///
    /// Primitive values expose no properties; looking one up yields `None`
    /// and the path evaluator degrades to the empty-string sentinel.
    pub fn property(&self, name: &str) -> Option<Value> {
        match self {
            Value::Map(entries) => entries.get(name).cloned(),
            Value::List(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .cloned(),
            Value::Object(object) => object.property(name),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Str(text) => f.write_str(text),
            Value::Int(number) => write!(f, "{}", number),
            Value::Float(number) => write!(f, "{}", number),
            Value::Bool(flag) => write!(f, "{}", flag),
            Value::List(items) => write!(f, "{:?}", items),
            Value::Map(entries) => write!(f, "{:?}", entries),
            Value::Object(object) => write!(f, "{:?}", object),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // objects are opaque; identity is the only equality available
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Int(i64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<Arc<dyn PropertyRead>> for Value {
    fn from(object: Arc<dyn PropertyRead>) -> Self {
        Value::Object(object)
    }
}

//! Dotted property-path evaluation over parameter sets

use crate::value::{ParamSet, Value};

/// Resolve `path` against `params`, consulting `fallback` for the root
/// segment when supplied.
///
/// The first dot-separated segment is looked up in `params`, then in
/// `fallback`; every later segment navigates the current value through the
/// accessor protocol ([`Value::property`]). Any miss along the way (a root
/// absent from both sets, an explicit [`Value::Null`], a segment the
/// current value does not expose) degrades to the empty-string sentinel.
/// Evaluation never errors.
pub fn evaluate(path: &str, params: &ParamSet, fallback: Option<&ParamSet>) -> Value {
    let mut segments = path.split('.');
    let Some(root_name) = segments.next() else {
        return Value::empty();
    };

    let Some(root) = lookup(root_name, params, fallback) else {
        // unresolved root short-circuits; no navigation is attempted
        return Value::empty();
    };

    let mut current = root;
    for segment in segments {
        match current.property(segment) {
            Some(next) => current = next,
            None => return Value::empty(),
        }
    }

    match current {
        Value::Null => Value::empty(),
        resolved => resolved,
    }
}

/// Root lookup. An explicit null in `params` blocks the fallback set: the
/// name is present, its value is just absent.
fn lookup(name: &str, params: &ParamSet, fallback: Option<&ParamSet>) -> Option<Value> {
    let found = params
        .get(name)
        .or_else(|| fallback.and_then(|defaults| defaults.get(name)));
    match found {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

//! The recursive evaluator entry point.

use crate::error::TransmuteError;
use crate::operators;
use serde_json::{Map, Value};

/// Evaluates `expr` against `context` and returns the transformed value.
///
/// - Strings are tried as path queries against the context and fall back
///   to their literal text.
/// - Maps dispatch on reserved operator keys, or are rebuilt key by key.
/// - Lists evaluate element-wise against the same context, preserving
///   order and length.
/// - Everything else passes through untouched.
///
/// Purely functional: neither input is modified, and concurrent calls are
/// safe because no state outlives a call.
pub fn transmute(expr: &Value, context: &Value) -> Result<Value, TransmuteError> {
    match expr {
        Value::String(value) => Ok(transmute_string(value, context)),
        Value::Object(map) => transmute_map(map, context),
        Value::Array(items) => transmute_slice(items, context),
        other => Ok(other.clone()),
    }
}

/// A string is first tried as a path query. A string that does not parse
/// as a query, or that matches nothing, is ordinary literal text — never
/// an error. A resolved `null` counts as a successful lookup.
fn transmute_string(value: &str, context: &Value) -> Value {
    match json_transmute_path::resolve(context, value) {
        Ok(resolved) => resolved,
        Err(_) => Value::String(value.to_string()),
    }
}

/// A failure on any element aborts the whole list; there is no partial
/// result.
fn transmute_slice(items: &[Value], context: &Value) -> Result<Value, TransmuteError> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(transmute(item, context)?);
    }
    Ok(Value::Array(result))
}

/// Scans the reserved operator table in precedence order and hands the map
/// to the first operator whose key is present. A map without reserved keys
/// is rebuilt with every value evaluated against the unmodified context.
fn transmute_map(map: &Map<String, Value>, context: &Value) -> Result<Value, TransmuteError> {
    for def in operators::operators() {
        if let Some(key) = def.matched_key(map) {
            return (def.eval_fn)(key, map, context);
        }
    }

    let mut result = Map::new();
    for (key, item) in map {
        result.insert(key.clone(), transmute(item, context)?);
    }
    Ok(Value::Object(result))
}

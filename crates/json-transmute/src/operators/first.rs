//! `#first` — first element of a list, pass-through otherwise.

use crate::error::TransmuteError;
use crate::transmute::transmute;
use serde_json::{Map, Value};

/// Selects the first element of the evaluated operand.
///
/// Never a type error: a non-list operand is returned unchanged, and an
/// empty list selects nothing (null). The element was already evaluated as
/// part of the operand's list evaluation and is returned verbatim.
pub(crate) fn first_eval(
    key: &str,
    map: &Map<String, Value>,
    context: &Value,
) -> Result<Value, TransmuteError> {
    match transmute(&map[key], context)? {
        Value::Array(items) => Ok(items.into_iter().next().unwrap_or(Value::Null)),
        other => Ok(other),
    }
}

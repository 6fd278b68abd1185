//! `#map` / `#each` — list iteration with a rebound context.

use crate::context::iteration_frame;
use crate::error::TransmuteError;
use crate::operators::{describe, rest_map};
use crate::transmute::transmute;
use serde_json::{Map, Value};

/// Iterates the evaluated operand, evaluating the sibling keys once per
/// element against a fresh `{parent, it}` frame.
///
/// The operand must evaluate to a list. Output order and length follow the
/// input list; a failure on any element aborts the whole operation.
pub(crate) fn map_eval(
    key: &str,
    map: &Map<String, Value>,
    context: &Value,
) -> Result<Value, TransmuteError> {
    let items = match transmute(&map[key], context)? {
        Value::Array(items) => items,
        other => {
            return Err(TransmuteError::NotAList {
                operator: key.to_string(),
                actual: describe(&other),
            })
        }
    };

    let rest = Value::Object(rest_map(map, key));
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        let frame = iteration_frame(context, item);
        result.push(transmute(&rest, &frame)?);
    }
    Ok(Value::Array(result))
}

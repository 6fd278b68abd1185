//! `#extend` — merge sibling keys over an evaluated base map.

use crate::error::TransmuteError;
use crate::transmute::transmute;
use serde_json::{Map, Value};

/// Extends the evaluated base with the map's sibling keys, overwriting on
/// collision and preserving base-only keys.
///
/// A non-map base passes through unchanged and the siblings are dropped.
/// A sibling whose evaluation fails is skipped so the base's prior value
/// for that key survives — per-key tolerance, deliberately different from
/// the fail-fast policy everywhere else.
pub(crate) fn extend_eval(
    key: &str,
    map: &Map<String, Value>,
    context: &Value,
) -> Result<Value, TransmuteError> {
    let mut base = match transmute(&map[key], context)? {
        Value::Object(base) => base,
        other => return Ok(other),
    };

    for (name, item) in map {
        if name == key {
            continue;
        }
        if let Ok(evaluated) = transmute(item, context) {
            base.insert(name.clone(), evaluated);
        }
    }

    Ok(Value::Object(base))
}

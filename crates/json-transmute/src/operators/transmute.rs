//! `#transmute` — evaluate the operand, then evaluate its result.

use crate::error::TransmuteError;
use crate::transmute::transmute;
use serde_json::{Map, Value};

/// Two-pass evaluation: the operand computes an expression (for instance a
/// path string stored inside the context), and the computed expression is
/// then evaluated as if it had appeared literally in the tree. A first-pass
/// failure propagates and the second pass never runs. Sibling keys are
/// ignored.
pub(crate) fn transmute_eval(
    key: &str,
    map: &Map<String, Value>,
    context: &Value,
) -> Result<Value, TransmuteError> {
    let computed = transmute(&map[key], context)?;
    transmute(&computed, context)
}

//! Synthetic iteration context frames.

use serde_json::{Map, Value};

/// Context key holding the enclosing context inside an iteration frame.
pub const PARENT_KEY: &str = "parent";

/// Context key holding the current element inside an iteration frame.
pub const IT_KEY: &str = "it";

/// Builds the `{parent, it}` frame an iteration operator rebinds the
/// context to for each element.
///
/// Frames nest without flattening: each iteration level adds exactly one
/// `parent` indirection, and expressions address outer levels with
/// repeated `$.parent.parent...` queries.
pub(crate) fn iteration_frame(parent: &Value, it: Value) -> Value {
    let mut frame = Map::new();
    frame.insert(PARENT_KEY.to_string(), parent.clone());
    frame.insert(IT_KEY.to_string(), it);
    Value::Object(frame)
}

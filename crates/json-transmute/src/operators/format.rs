//! `#format` — string interpolation via the template renderer.

use crate::error::TransmuteError;
use json_transmute_template::{render, Helpers};
use serde_json::{Map, Value};

/// Renders the template under `key` against the context.
///
/// The renderer sees the context itself as its data value, plus a single
/// `path` helper that resolves path queries against that same context.
/// Sibling keys are configuration for other operators and are ignored
/// here; renderer failures propagate fatally.
pub(crate) fn format_eval(
    key: &str,
    map: &Map<String, Value>,
    context: &Value,
) -> Result<Value, TransmuteError> {
    let template = match &map[key] {
        Value::String(template) => template,
        _ => return Err(TransmuteError::TemplateNotString),
    };

    let mut helpers = Helpers::new();
    helpers.register("path", |args: &[Value]| path_helper(args, context));

    let rendered = render(template, context, &helpers)?;
    Ok(Value::String(rendered))
}

/// The `path` template helper: resolves a query string against the current
/// context, null when it matches nothing.
fn path_helper(args: &[Value], context: &Value) -> Value {
    let query = match args.first() {
        Some(Value::String(query)) => query,
        _ => return Value::Null,
    };
    json_transmute_path::resolve(context, query).unwrap_or(Value::Null)
}

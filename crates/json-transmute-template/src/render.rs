//! Template rendering.

use crate::types::{Action, Arg, Node};
use crate::{Helpers, RenderError};
use serde_json::Value;

pub(crate) fn render_nodes(
    nodes: &[Node],
    data: &Value,
    helpers: &Helpers<'_>,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Action(action) => {
                let value = eval_action(action, data, helpers)?;
                write_value(&mut out, &value);
            }
        }
    }
    Ok(out)
}

fn eval_action(
    action: &Action,
    data: &Value,
    helpers: &Helpers<'_>,
) -> Result<Value, RenderError> {
    match action {
        Action::Field(chain) => Ok(field_value(data, chain)),
        Action::Helper { name, args } => {
            let helper = helpers
                .get(name)
                .ok_or_else(|| RenderError::UnknownHelper(name.clone()))?;
            let args: Vec<Value> = args
                .iter()
                .map(|arg| match arg {
                    Arg::Literal(value) => value.clone(),
                    Arg::Field(chain) => field_value(data, chain),
                })
                .collect();
            Ok(helper(&args))
        }
    }
}

/// A field chain that addresses nothing yields null, which renders as
/// empty text.
fn field_value(data: &Value, chain: &[String]) -> Value {
    let mut current = data;
    for name in chain {
        current = match current.as_object().and_then(|map| map.get(name)) {
            Some(value) => value,
            None => return Value::Null,
        };
    }
    current.clone()
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(text) => out.push_str(text),
        // numbers, booleans, lists and maps render in their JSON form
        other => out.push_str(&other.to_string()),
    }
}

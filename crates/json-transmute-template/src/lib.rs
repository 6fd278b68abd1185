//! Action-template renderer for `serde_json` values.
//!
//! A template is literal text interleaved with `{{ ... }}` actions. An
//! action is either a field chain into the data value (`{{.user.name}}`,
//! bare `{{.}}` for the whole value) or an invocation of a named helper
//! function (`{{path "$.user.name"}}`). There are no control constructs.
//!
//! # Example
//!
//! ```
//! use json_transmute_template::{render, Helpers};
//! use serde_json::{json, Value};
//!
//! let mut helpers = Helpers::new();
//! helpers.register("upper", |args: &[Value]| match args.first() {
//!     Some(Value::String(s)) => Value::String(s.to_uppercase()),
//!     _ => Value::Null,
//! });
//!
//! let data = json!({"name": "world"});
//! let out = render("Hello {{upper .name}}!", &data, &helpers).unwrap();
//! assert_eq!(out, "Hello WORLD!");
//! ```

mod types;
pub use types::{Action, Arg, Node};

mod parser;
pub use parser::TemplateParser;

mod render;

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("Unclosed action")]
    UnclosedAction,
    #[error("Empty action")]
    EmptyAction,
    #[error("Invalid token in action: {0}")]
    InvalidArgument(String),
    #[error("Unknown helper: {0}")]
    UnknownHelper(String),
}

type HelperFn<'a> = Box<dyn Fn(&[Value]) -> Value + 'a>;

/// Named helper functions available to a template.
///
/// Helpers borrow from the caller's scope, so a helper may close over the
/// data value it is rendered against.
#[derive(Default)]
pub struct Helpers<'a> {
    map: HashMap<String, HelperFn<'a>>,
}

impl<'a> Helpers<'a> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registers `helper` under `name`, replacing any previous registration.
    pub fn register<F>(&mut self, name: &str, helper: F)
    where
        F: Fn(&[Value]) -> Value + 'a,
    {
        self.map.insert(name.to_string(), Box::new(helper));
    }

    fn get(&self, name: &str) -> Option<&HelperFn<'a>> {
        self.map.get(name)
    }
}

/// Renders `template` against `data`.
///
/// Helper invocations dispatch through `helpers`; naming a helper that is
/// not registered is an error. Strings render verbatim, numbers and
/// booleans in JSON form, null and missing fields as empty text, lists and
/// maps as compact JSON.
pub fn render(template: &str, data: &Value, helpers: &Helpers<'_>) -> Result<String, RenderError> {
    let nodes = TemplateParser::parse(template)?;
    render::render_nodes(&nodes, data, helpers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_helpers() -> Helpers<'static> {
        Helpers::new()
    }

    #[test]
    fn test_plain_text() {
        let out = render("just text", &json!(null), &no_helpers()).unwrap();
        assert_eq!(out, "just text");
    }

    #[test]
    fn test_field() {
        let out = render("Hello {{.key}}!", &json!({"key": "world"}), &no_helpers()).unwrap();
        assert_eq!(out, "Hello world!");
    }

    #[test]
    fn test_nested_field() {
        let data = json!({"user": {"name": "Alice"}});
        let out = render("{{.user.name}}", &data, &no_helpers()).unwrap();
        assert_eq!(out, "Alice");
    }

    #[test]
    fn test_bare_dot_is_whole_data() {
        let out = render("{{.}}", &json!("everything"), &no_helpers()).unwrap();
        assert_eq!(out, "everything");
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let out = render("[{{.missing}}]", &json!({"key": 1}), &no_helpers()).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_number_and_bool_render_as_json() {
        let data = json!({"n": 1337, "b": true});
        let out = render("{{.n}} {{.b}}", &data, &no_helpers()).unwrap();
        assert_eq!(out, "1337 true");
    }

    #[test]
    fn test_container_renders_as_compact_json() {
        let data = json!({"items": [1, 2]});
        let out = render("{{.items}}", &data, &no_helpers()).unwrap();
        assert_eq!(out, "[1,2]");
    }

    #[test]
    fn test_helper_with_string_literal() {
        let mut helpers = Helpers::new();
        helpers.register("echo", |args: &[Value]| {
            args.first().cloned().unwrap_or(Value::Null)
        });
        let out = render(r#"{{echo "hi"}}"#, &json!(null), &helpers).unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_helper_with_field_argument() {
        let mut helpers = Helpers::new();
        helpers.register("upper", |args: &[Value]| match args.first() {
            Some(Value::String(s)) => Value::String(s.to_uppercase()),
            _ => Value::Null,
        });
        let data = json!({"name": "bob"});
        let out = render("{{upper .name}}", &data, &helpers).unwrap();
        assert_eq!(out, "BOB");
    }

    #[test]
    fn test_helper_with_number_literal() {
        let mut helpers = Helpers::new();
        helpers.register("double", |args: &[Value]| {
            let n = args.first().and_then(Value::as_f64).unwrap_or_default();
            json!(n * 2.0)
        });
        let out = render("{{double 21}}", &json!(null), &helpers).unwrap();
        assert_eq!(out, "42.0");
    }

    #[test]
    fn test_helper_closing_over_caller_state() {
        let context = json!({"greeting": "hey"});
        let mut helpers = Helpers::new();
        helpers.register("greeting", |_: &[Value]| context["greeting"].clone());
        let out = render("{{greeting}} there", &json!(null), &helpers).unwrap();
        assert_eq!(out, "hey there");
    }

    #[test]
    fn test_unknown_helper() {
        assert_eq!(
            render("{{nope}}", &json!(null), &no_helpers()),
            Err(RenderError::UnknownHelper("nope".into()))
        );
    }

    #[test]
    fn test_unclosed_action() {
        assert_eq!(
            render("text {{.key", &json!(null), &no_helpers()),
            Err(RenderError::UnclosedAction)
        );
    }

    #[test]
    fn test_empty_action() {
        assert_eq!(
            render("{{}}", &json!(null), &no_helpers()),
            Err(RenderError::EmptyAction)
        );
        assert_eq!(
            render("{{   }}", &json!(null), &no_helpers()),
            Err(RenderError::EmptyAction)
        );
    }

    #[test]
    fn test_invalid_token() {
        assert!(matches!(
            render("{{?}}", &json!(null), &no_helpers()),
            Err(RenderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_field_chain() {
        assert!(matches!(
            render("{{.a.}}", &json!({"a": 1}), &no_helpers()),
            Err(RenderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_adjacent_actions() {
        let data = json!({"a": "x", "b": "y"});
        let out = render("{{.a}}{{.b}}", &data, &no_helpers()).unwrap();
        assert_eq!(out, "xy");
    }
}

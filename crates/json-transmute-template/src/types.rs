//! Parsed template representation.

use serde_json::Value;

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text between actions, emitted verbatim.
    Text(String),
    /// An `{{ ... }}` action.
    Action(Action),
}

/// The content of one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Field chain into the data value: `.a.b`. An empty chain (`.`) is the
    /// data value itself.
    Field(Vec<String>),
    /// Helper invocation: `name arg…`.
    Helper { name: String, args: Vec<Arg> },
}

/// One helper argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Quoted string or number literal.
    Literal(Value),
    /// Field chain resolved against the data value at render time.
    Field(Vec<String>),
}

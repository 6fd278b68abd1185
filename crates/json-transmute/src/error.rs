use json_transmute_template::RenderError;
use thiserror::Error;

/// Errors produced while evaluating an expression.
///
/// Path-resolution failures never appear here: a string that does not
/// resolve against the context falls back to its literal text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransmuteError {
    /// The value under `#format` was not a string template.
    #[error("value for key \"#format\" must be a string")]
    TemplateNotString,

    /// An operator that consumes a list (`#map`/`#each`, `#sum`) was given
    /// a value that did not evaluate to one.
    #[error("\"{operator}\" expected to evaluate to a list, got: {actual}")]
    NotAList { operator: String, actual: String },

    /// The template renderer rejected a `#format` template.
    #[error(transparent)]
    Render(#[from] RenderError),
}

//! Declarative JSON-to-JSON transformation engine.
//!
//! # Overview
//!
//! An *expression* is an arbitrary JSON value; a *context* is a second JSON
//! value. [`transmute`] walks the expression recursively: strings are tried
//! as path queries against the context (falling back to their literal
//! text), maps are checked for reserved operator keys, lists recurse
//! element-wise, and scalars pass through untouched.
//!
//! Reserved operator keys, in dispatch precedence order: `#transmute`,
//! `#extend`, `#first`, `#format`, `#map` (alias `#each`), `#sum`.
//!
//! # Example
//!
//! ```
//! use json_transmute::transmute;
//! use serde_json::json;
//!
//! let expr = json!({
//!     "#map": "$.items",
//!     "label": "$.it.title",
//! });
//! let context = json!({
//!     "items": [{"title": "one"}, {"title": "two"}],
//! });
//!
//! let result = transmute(&expr, &context).unwrap();
//! assert_eq!(result, json!([{"label": "one"}, {"label": "two"}]));
//! ```

pub mod context;
pub mod error;
pub mod operators;
pub mod transmute;

// Re-export the core public API
pub use context::{IT_KEY, PARENT_KEY};
pub use error::TransmuteError;
pub use operators::{OP_EACH, OP_EXTEND, OP_FIRST, OP_FORMAT, OP_MAP, OP_SUM, OP_TRANSMUTE};
pub use transmute::transmute;

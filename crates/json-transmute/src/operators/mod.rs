//! Reserved operator definitions and dispatch order.

pub mod extend;
pub mod first;
pub mod format;
pub mod iterate;
pub mod sum;
pub mod transmute;

use crate::error::TransmuteError;
use serde_json::{Map, Value};

pub const OP_TRANSMUTE: &str = "#transmute";
pub const OP_EXTEND: &str = "#extend";
pub const OP_FIRST: &str = "#first";
pub const OP_FORMAT: &str = "#format";
pub const OP_MAP: &str = "#map";
pub const OP_EACH: &str = "#each";
pub const OP_SUM: &str = "#sum";

/// The evaluation function of one reserved operator.
///
/// `key` is the reserved key actually present in `map`; the operator's
/// argument is the value under `key`, and the remaining keys of `map` are
/// its sibling configuration.
pub(crate) type OperatorFn =
    fn(key: &str, map: &Map<String, Value>, context: &Value) -> Result<Value, TransmuteError>;

pub(crate) struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub eval_fn: OperatorFn,
}

impl OperatorDefinition {
    /// Returns the name or alias of this operator present in `map`, if any.
    pub fn matched_key(&self, map: &Map<String, Value>) -> Option<&'static str> {
        if map.contains_key(self.name) {
            return Some(self.name);
        }
        self.aliases
            .iter()
            .copied()
            .find(|alias| map.contains_key(*alias))
    }
}

/// All reserved operators in dispatch order.
///
/// The order is a contract: a map may legally carry several reserved keys,
/// and only the first match here is honored.
pub(crate) fn operators() -> &'static [OperatorDefinition] {
    static OPERATORS: [OperatorDefinition; 6] = [
        OperatorDefinition {
            name: OP_TRANSMUTE,
            aliases: &[],
            eval_fn: transmute::transmute_eval,
        },
        OperatorDefinition {
            name: OP_EXTEND,
            aliases: &[],
            eval_fn: extend::extend_eval,
        },
        OperatorDefinition {
            name: OP_FIRST,
            aliases: &[],
            eval_fn: first::first_eval,
        },
        OperatorDefinition {
            name: OP_FORMAT,
            aliases: &[],
            eval_fn: format::format_eval,
        },
        OperatorDefinition {
            name: OP_MAP,
            aliases: &[OP_EACH],
            eval_fn: iterate::map_eval,
        },
        OperatorDefinition {
            name: OP_SUM,
            aliases: &[],
            eval_fn: sum::sum_eval,
        },
    ];
    &OPERATORS
}

/// Copies `map` without `omit` — the sibling configuration handed to an
/// operator body.
pub(crate) fn rest_map(map: &Map<String, Value>, omit: &str) -> Map<String, Value> {
    let mut rest = map.clone();
    rest.remove(omit);
    rest
}

/// Renders an offending value for a type-mismatch message.
pub(crate) fn describe(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

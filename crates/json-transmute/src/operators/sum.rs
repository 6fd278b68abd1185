//! `#sum` — numeric aggregation with exact decimal accumulation.

use crate::error::TransmuteError;
use crate::operators::describe;
use crate::transmute::transmute;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Sums the elements of the evaluated operand, which must be a list.
///
/// Accumulation is exact decimal arithmetic, narrowed to the JSON number
/// representation at the end, so `1.1 + 2.1 + 3.2` is `6.4` and not a
/// float-drift neighbor of it.
pub(crate) fn sum_eval(
    key: &str,
    map: &Map<String, Value>,
    context: &Value,
) -> Result<Value, TransmuteError> {
    let items = match transmute(&map[key], context)? {
        Value::Array(items) => items,
        other => {
            return Err(TransmuteError::NotAList {
                operator: key.to_string(),
                actual: describe(&other),
            })
        }
    };

    let mut total = Decimal::ZERO;
    for item in &items {
        // elements that do not read as numbers contribute nothing
        if let Some(term) = decimal_term(item) {
            total = total.saturating_add(term);
        }
    }
    Ok(json_number(total))
}

/// Decimal reading of one list element: numbers and numeric strings count
/// (scientific notation included); booleans, nulls, lists and maps do not.
fn decimal_term(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}

fn json_number(total: Decimal) -> Value {
    let narrowed = total.to_f64().unwrap_or_default();
    serde_json::Number::from_f64(narrowed)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

//! Single-value path queries over `serde_json` values.
//!
//! Path queries are `$`-rooted member/index chains: `$.store.book[0].title`,
//! `$['store name']`, `$.items[-1]`. A query addresses at most one value;
//! there are no wildcards, slices or filters.
//!
//! # Example
//!
//! ```
//! use json_transmute_path::resolve;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "store": {
//!         "books": [
//!             {"title": "Sayings of the Century"},
//!             {"title": "Sword of Honour"}
//!         ]
//!     }
//! });
//!
//! let title = resolve(&doc, "$.store.books[1].title").unwrap();
//! assert_eq!(title, json!("Sword of Honour"));
//! ```

mod types;
pub use types::{PathQuery, Segment};

mod parser;
pub use parser::{ParseError, PathParser};

mod eval;
pub use eval::lookup;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("path matched no value")]
    NotFound,
}

/// Parses `query` and looks it up in `context`, returning an owned copy of
/// the addressed value.
///
/// A query that parses but matches nothing is [`ResolveError::NotFound`];
/// note that a found `null` is a successful resolution, not a miss.
pub fn resolve(context: &Value, query: &str) -> Result<Value, ResolveError> {
    let path = PathParser::parse(query)?;
    lookup(context, &path)
        .cloned()
        .ok_or(ResolveError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_root() {
        let path = PathParser::parse("$").unwrap();
        assert_eq!(path.segments.len(), 0);
    }

    #[test]
    fn test_parse_dot_notation() {
        let path = PathParser::parse("$.store.books").unwrap();
        assert_eq!(
            path.segments,
            vec![
                Segment::Name("store".into()),
                Segment::Name("books".into())
            ]
        );
    }

    #[test]
    fn test_parse_bracket_notation() {
        let path = PathParser::parse("$['store'][\"books\"]").unwrap();
        assert_eq!(
            path.segments,
            vec![
                Segment::Name("store".into()),
                Segment::Name("books".into())
            ]
        );
    }

    #[test]
    fn test_parse_index() {
        let path = PathParser::parse("$.books[0]").unwrap();
        assert_eq!(
            path.segments,
            vec![Segment::Name("books".into()), Segment::Index(0)]
        );
    }

    #[test]
    fn test_parse_negative_index() {
        let path = PathParser::parse("$[-2]").unwrap();
        assert_eq!(path.segments, vec![Segment::Index(-2)]);
    }

    #[test]
    fn test_parse_quoted_string_with_spaces() {
        let path = PathParser::parse("$['store name']").unwrap();
        assert_eq!(path.segments, vec![Segment::Name("store name".into())]);
    }

    #[test]
    fn test_parse_escaped_quote() {
        let path = PathParser::parse(r"$['it\'s']").unwrap();
        assert_eq!(path.segments, vec![Segment::Name("it's".into())]);
    }

    #[test]
    fn test_parse_rejects_missing_root() {
        assert_eq!(
            PathParser::parse("store.books"),
            Err(ParseError::ExpectedRoot)
        );
    }

    #[test]
    fn test_parse_rejects_empty_member() {
        assert_eq!(PathParser::parse("$."), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_parse_rejects_empty_bracket() {
        assert_eq!(PathParser::parse("$[]"), Err(ParseError::EmptySelector));
    }

    #[test]
    fn test_parse_rejects_unclosed_bracket() {
        assert_eq!(PathParser::parse("$[0"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_parse_rejects_unclosed_string() {
        assert_eq!(PathParser::parse("$['abc"), Err(ParseError::UnclosedString));
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(PathParser::parse("$.store?bad").is_err());
    }

    #[test]
    fn test_parse_rejects_bare_dash_index() {
        assert_eq!(PathParser::parse("$[-]"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn test_lookup_root() {
        let doc = json!({"a": 1});
        let path = PathParser::parse("$").unwrap();
        assert_eq!(lookup(&doc, &path), Some(&doc));
    }

    #[test]
    fn test_lookup_nested() {
        let doc = json!({"a": {"b": 42}});
        let path = PathParser::parse("$.a.b").unwrap();
        assert_eq!(lookup(&doc, &path), Some(&json!(42)));
    }

    #[test]
    fn test_lookup_array_index() {
        let doc = json!([1, 2, 3, 4, 5]);
        let path = PathParser::parse("$[2]").unwrap();
        assert_eq!(lookup(&doc, &path), Some(&json!(3)));
    }

    #[test]
    fn test_lookup_negative_index() {
        let doc = json!([1, 2, 3, 4, 5]);
        let path = PathParser::parse("$[-1]").unwrap();
        assert_eq!(lookup(&doc, &path), Some(&json!(5)));
    }

    #[test]
    fn test_lookup_index_out_of_range() {
        let doc = json!([1, 2, 3]);
        assert_eq!(lookup(&doc, &PathParser::parse("$[3]").unwrap()), None);
        assert_eq!(lookup(&doc, &PathParser::parse("$[-4]").unwrap()), None);
    }

    #[test]
    fn test_lookup_missing_member() {
        let doc = json!({"a": 1});
        let path = PathParser::parse("$.missing").unwrap();
        assert_eq!(lookup(&doc, &path), None);
    }

    #[test]
    fn test_lookup_shape_mismatch() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(lookup(&doc, &PathParser::parse("$.a.b").unwrap()), None);
        assert_eq!(lookup(&doc, &PathParser::parse("$[0]").unwrap()), None);
    }

    #[test]
    fn test_lookup_null_member_is_found() {
        let doc = json!({"maybe": null});
        let path = PathParser::parse("$.maybe").unwrap();
        assert_eq!(lookup(&doc, &path), Some(&Value::Null));
    }

    #[test]
    fn test_resolve_clones_value() {
        let doc = json!({"person": {"name": "Alice"}});
        let person = resolve(&doc, "$.person").unwrap();
        assert_eq!(person, json!({"name": "Alice"}));
    }

    #[test]
    fn test_resolve_not_found() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, "$.b"), Err(ResolveError::NotFound));
    }

    #[test]
    fn test_resolve_parse_error() {
        let doc = json!({"a": 1});
        assert!(matches!(
            resolve(&doc, "plain text"),
            Err(ResolveError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_against_non_container() {
        assert_eq!(
            resolve(&json!(null), "$.anything"),
            Err(ResolveError::NotFound)
        );
        assert_eq!(resolve(&json!(42), "$[0]"), Err(ResolveError::NotFound));
    }
}

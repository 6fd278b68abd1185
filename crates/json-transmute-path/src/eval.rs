//! Path query evaluation.

use crate::types::{PathQuery, Segment};
use serde_json::Value;

/// Walks `path` from the root of `context`.
///
/// Returns `None` when any step addresses a missing member, an
/// out-of-range index, or a value of the wrong shape.
pub fn lookup<'a>(context: &'a Value, path: &PathQuery) -> Option<&'a Value> {
    let mut current = context;
    for segment in &path.segments {
        current = match segment {
            Segment::Name(name) => current.as_object()?.get(name)?,
            Segment::Index(index) => {
                let items = current.as_array()?;
                let i = normalize_index(*index, items.len())?;
                &items[i]
            }
        };
    }
    Some(current)
}

fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let i = if index < 0 {
        index.checked_add(len as isize)?
    } else {
        index
    };
    if i < 0 || i as usize >= len {
        return None;
    }
    Some(i as usize)
}

//! Path query types.

/// One step of a parsed path query.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Member access: `.name`, `['name']`
    Name(String),
    /// Array index: `[0]`, `[-1]` (negative counts from the end)
    Index(isize),
}

/// A parsed `$`-rooted path query.
///
/// A query addresses at most one value; there are no wildcards, slices or
/// filters in this grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct PathQuery {
    /// Query segments, root first.
    pub segments: Vec<Segment>,
}

impl PathQuery {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

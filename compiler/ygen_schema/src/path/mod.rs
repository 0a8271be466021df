//! Schema paths as ordered segment values.
//!
//! A schema path is the sequence of data-node names from the module boundary
//! down to a node. Absolute paths begin with an empty segment standing for
//! the boundary itself:
//!
//! ```text
//! ["", "module", "foo", "bar"]   →   /module/foo/bar
//! ["bar", "baz"]                 →   bar/baz
//! ```

use std::fmt;

/// An ordered, owned sequence of schema path segments.
///
/// Paths are immutable values; helpers that derive one path from another
/// always copy, never slice into shared storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaPath {
    segments: Vec<String>,
}

impl SchemaPath {
    /// Create a path from its segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The bare module boundary, `[""]`.
    pub fn root() -> Self {
        Self {
            segments: vec![String::new()],
        }
    }

    /// Parse a slash-separated path. A leading `/` yields the empty
    /// boundary segment; `"/"` alone is the root.
    pub fn parse(s: &str) -> Self {
        if s == "/" {
            return Self::root();
        }
        if s.is_empty() {
            return Self::default();
        }
        Self {
            segments: s.split('/').map(String::from).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the path begins at the module boundary.
    pub fn is_absolute(&self) -> bool {
        self.segments.first().is_some_and(String::is_empty)
    }

    /// Get the last segment (leaf name).
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Check if this path starts with another path.
    pub fn starts_with(&self, prefix: &SchemaPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Check if this path lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &SchemaPath) -> bool {
        self.len() > ancestor.len() && self.starts_with(ancestor)
    }

    /// Copy of the segments after `prefix`, or `None` if `prefix` is not a prefix.
    pub fn strip_prefix(&self, prefix: &SchemaPath) -> Option<SchemaPath> {
        self.segments
            .strip_prefix(prefix.segments.as_slice())
            .map(|rest| SchemaPath::new(rest.to_vec()))
    }

    /// Copy of the segments from index `start` onwards.
    pub fn tail(&self, start: usize) -> SchemaPath {
        SchemaPath::new(self.segments.get(start..).unwrap_or_default().to_vec())
    }

    /// Append a segment to create a new path.
    pub fn child(&self, segment: impl Into<String>) -> SchemaPath {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment.into());
        SchemaPath::new(segments)
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.len() == 1 && self.is_absolute() {
            return f.write_str("/");
        }
        f.write_str(&self.segments.join("/"))
    }
}

impl<S: Into<String>> FromIterator<S> for SchemaPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SchemaPath::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for SchemaPath {
    fn from(segments: Vec<String>) -> Self {
        SchemaPath::new(segments)
    }
}

impl From<SchemaPath> for Vec<String> {
    fn from(path: SchemaPath) -> Self {
        path.segments
    }
}

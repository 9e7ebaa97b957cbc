//! Dotted configuration paths built during recursive traversal.
//!
//! A [`PathEntry`] is a borrowed chain: every entry points at its parent, so
//! descending one level is a stack allocation and never touches the heap.
//! The chain is flattened into a `String` only when a leaf is written.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::Value;

// -----------------------------------------------------------------------------
// Segment

/// A single step of a [`PathEntry`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// A field name or a map key.
    Key(&'a str),
    /// A list position, always zero-based.
    Index(usize),
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Key(value)
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::Key(value.as_str())
    }
}

impl From<usize> for Segment<'_> {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

// -----------------------------------------------------------------------------
// PathEntry

/// An immutable chain of path segments, such as `items.3.name`.
///
/// # Examples
///
/// ```
/// use vc_tree::{PathEntry, Value};
///
/// let root = PathEntry::root("items");
/// let element = root.child(3);
/// let leaf = element.child("name");
///
/// assert_eq!(leaf.to_string(), "items.3.name");
/// assert_eq!(leaf.depth(), 3);
///
/// let patch = leaf.leaf("sword");
/// assert_eq!(patch.path, "items.3.name");
/// assert_eq!(patch.value, Value::from("sword"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathEntry<'a> {
    segment: Segment<'a>,
    parent: Option<&'a PathEntry<'a>>,
    depth: usize,
}

impl<'a> PathEntry<'a> {
    /// Creates a chain with a single segment.
    #[inline]
    pub fn root(segment: impl Into<Segment<'a>>) -> Self {
        Self {
            segment: segment.into(),
            parent: None,
            depth: 1,
        }
    }

    /// Creates an entry below an optional parent.
    ///
    /// Traversals start with no parent at the model root, which makes this
    /// the usual constructor inside recursive code.
    #[inline]
    pub fn new(segment: impl Into<Segment<'a>>, parent: Option<&'a PathEntry<'a>>) -> Self {
        Self {
            segment: segment.into(),
            parent,
            depth: parent.map_or(1, |p| p.depth + 1),
        }
    }

    /// Extends the chain by one segment.
    #[inline]
    pub fn child<'b>(&'b self, segment: impl Into<Segment<'b>>) -> PathEntry<'b>
    where
        'a: 'b,
    {
        PathEntry {
            segment: segment.into(),
            parent: Some(self),
            depth: self.depth + 1,
        }
    }

    /// The last segment of the chain.
    #[inline]
    pub const fn segment(&self) -> Segment<'a> {
        self.segment
    }

    #[inline]
    pub const fn parent(&self) -> Option<&'a PathEntry<'a>> {
        self.parent
    }

    /// Number of segments in the chain.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the segments from the root to this entry.
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let mut out = Vec::with_capacity(self.depth);
        let mut entry = Some(self);
        while let Some(current) = entry {
            out.push(current.segment);
            entry = current.parent;
        }
        out.reverse();
        out
    }

    /// Terminates the chain with a leaf value.
    #[inline]
    pub fn leaf(&self, value: impl Into<Value>) -> Patch {
        Patch {
            path: self.to_string(),
            value: value.into(),
        }
    }
}

impl fmt::Display for PathEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            write!(f, "{parent}.")?;
        }
        write!(f, "{}", self.segment)
    }
}

// -----------------------------------------------------------------------------
// Patch

/// A single write: a flattened dotted path and the value to store there.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub path: String,
    pub value: Value,
}

impl Patch {
    #[inline]
    pub fn new(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.path, self.value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{PathEntry, Segment};

    #[test]
    fn segments_are_root_first() {
        let root = PathEntry::root("servers");
        let entry = root.child(0);
        let leaf = entry.child("port");

        assert_eq!(
            leaf.segments(),
            [Segment::Key("servers"), Segment::Index(0), Segment::Key("port")]
        );
        assert_eq!(leaf.parent().map(|p| p.depth()), Some(2));
    }

    #[test]
    fn new_without_parent_is_a_root() {
        let entry = PathEntry::new("name", None);
        assert_eq!(entry.depth(), 1);
        assert_eq!(entry.to_string(), "name");
    }
}

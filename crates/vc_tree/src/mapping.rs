use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use foldhash::fast::FixedState;
use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys, Values};

use crate::path::{PathEntry, Patch};
use crate::Value;

// -----------------------------------------------------------------------------
// Mapping

/// An ordered, string-keyed node of the configuration tree.
///
/// Iteration follows insertion order, so a mapping parsed from a document
/// yields its keys in document order. Equality ignores order.
///
/// The container's interface is fully abstracted, exposing no [`IndexMap`]
/// specific APIs besides the iterator types.
///
/// # Examples
///
/// ```
/// use vc_tree::{Mapping, Value};
///
/// let mut items = Mapping::new();
/// items.insert("1", "second");
/// items.insert("0", "first");
///
/// let keys: Vec<&str> = items.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["1", "0"]);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Mapping(IndexMap<String, Value, FixedState>);

impl Mapping {
    /// Creates an empty `Mapping`.
    #[inline]
    pub fn new() -> Self {
        Self(IndexMap::with_hasher(FixedState::default()))
    }

    /// Creates an empty `Mapping` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity_and_hasher(
            capacity,
            FixedState::default(),
        ))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts a key-value pair, keeping the position of an existing key.
    ///
    /// Returns the previous value, if any.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, preserving the order of the remaining entries.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    #[inline]
    pub fn values(&self) -> Values<'_, String, Value> {
        self.0.values()
    }

    /// Resolves a dotted path such as `"server.limits.max"`.
    ///
    /// Every segment but the last must name a nested mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_tree::{Mapping, Value};
    ///
    /// let mut root = Mapping::new();
    /// root.set_path("a.b", true);
    ///
    /// assert_eq!(root.get_path("a.b"), Some(&Value::Bool(true)));
    /// assert!(root.get_path("a.b.c").is_none());
    /// assert!(root.get_path("a.x").is_none());
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let (parents, last) = split_path(path);
        let mut node = self;
        for segment in parents {
            node = node.get(segment)?.as_map()?;
        }
        node.get(last)
    }

    /// Writes `value` at a dotted path.
    ///
    /// Missing intermediate mappings are created; an intermediate node that
    /// holds anything other than a mapping is replaced by one.
    ///
    /// Returns the previous value at the path, if any.
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Option<Value> {
        let (parents, last) = split_path(path);
        let mut node = self;
        for segment in parents {
            let slot = node
                .0
                .entry(String::from(segment))
                .or_insert_with(|| Value::Map(Mapping::new()));
            if !matches!(slot, Value::Map(_)) {
                *slot = Value::Map(Mapping::new());
            }
            let Value::Map(map) = slot else {
                return None;
            };
            node = map;
        }
        node.insert(last, value)
    }

    /// Removes the value at a dotted path. Parent mappings are kept.
    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        let (parents, last) = split_path(path);
        let mut node = self;
        for segment in parents {
            node = node.get_mut(segment)?.as_map_mut()?;
        }
        node.remove(last)
    }

    /// Flattens the tree into one [`Patch`] per leaf, in iteration order.
    ///
    /// Literal lists and empty mappings are leaves.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_tree::{Mapping, Value};
    ///
    /// let mut root = Mapping::new();
    /// root.set_path("db.url", "sqlite://");
    /// root.set_path("db.pool", 4);
    /// root.insert("empty", Mapping::new());
    ///
    /// let paths: Vec<String> = root.flatten().into_iter().map(|p| p.path).collect();
    /// assert_eq!(paths, ["db.url", "db.pool", "empty"]);
    /// ```
    pub fn flatten(&self) -> Vec<Patch> {
        let mut out = Vec::new();
        flatten_into(self, None, &mut out);
        out
    }
}

fn split_path(path: &str) -> (impl Iterator<Item = &str>, &str) {
    let (parents, last) = match path.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    };
    (parents.into_iter().flat_map(|p| p.split('.')), last)
}

fn flatten_into(map: &Mapping, base: Option<&PathEntry<'_>>, out: &mut Vec<Patch>) {
    for (key, value) in map.iter() {
        let path = PathEntry::new(key.as_str(), base);
        match value {
            Value::Map(child) if !child.is_empty() => flatten_into(child, Some(&path), out),
            _ => out.push(path.leaf(value.clone())),
        }
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.0.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Mapping;
    use crate::Value;

    #[test]
    fn set_path_replaces_scalar_parents() {
        let mut root = Mapping::new();
        root.insert("a", 1);
        root.set_path("a.b.c", "x");

        assert_eq!(root.get_path("a.b.c"), Some(&Value::from("x")));
        assert_eq!(root.len(), 1);

        root.insert("l", Value::List(vec![Value::Int(1)]));
        assert_eq!(root.set_path("l.0", 2), None);
        assert_eq!(root.get_path("l.0"), Some(&Value::Int(2)));
    }

    #[test]
    fn remove_path_keeps_parents() {
        let mut root = Mapping::new();
        root.set_path("a.b", 1);
        root.set_path("a.c", 2);

        assert_eq!(root.remove_path("a.b"), Some(Value::Int(1)));
        assert_eq!(root.remove_path("a.b"), None);
        assert_eq!(root.get_path("a.c"), Some(&Value::Int(2)));
    }

    #[test]
    fn equality_ignores_order() {
        let lhs: Mapping = [("x", 1), ("y", 2)].into_iter().collect();
        let rhs: Mapping = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(lhs, rhs);
    }
}

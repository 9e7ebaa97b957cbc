//! The storage seam between the model engine and a persistent store.
//!
//! The engine never touches storage directly. It reads a backend as one
//! nested [`Mapping`] and writes back through dotted paths.

use crate::{Mapping, Patch, Value};

// -----------------------------------------------------------------------------
// ConfigBackend

/// A key/value store addressed by dotted paths.
///
/// # Examples
///
/// ```
/// use vc_tree::{ConfigBackend, MemoryBackend, Patch, Value};
///
/// let mut backend = MemoryBackend::new();
/// let written = backend.apply([
///     Patch::new("server.port", 8080),
///     Patch::new("server.host", "localhost"),
/// ]);
///
/// assert_eq!(written, 2);
/// assert_eq!(backend.get("server.port"), Some(Value::Int(8080)));
/// assert_eq!(backend.to_map().len(), 1);
/// ```
pub trait ConfigBackend {
    /// Reads the value stored at `path`.
    fn get(&self, path: &str) -> Option<Value>;

    /// Writes `value` at `path`, replacing whatever was there.
    fn set(&mut self, path: &str, value: Value);

    /// Presents the whole store as one nested mapping.
    fn to_map(&self) -> Mapping;

    /// Writes every patch in order and returns the number of writes.
    fn apply<I>(&mut self, patches: I) -> usize
    where
        I: IntoIterator<Item = Patch>,
        Self: Sized,
    {
        let mut count = 0;
        for Patch { path, value } in patches {
            self.set(&path, value);
            count += 1;
        }
        count
    }
}

impl<B: ConfigBackend + ?Sized> ConfigBackend for &mut B {
    #[inline]
    fn get(&self, path: &str) -> Option<Value> {
        (**self).get(path)
    }

    #[inline]
    fn set(&mut self, path: &str, value: Value) {
        (**self).set(path, value);
    }

    #[inline]
    fn to_map(&self) -> Mapping {
        (**self).to_map()
    }
}

// -----------------------------------------------------------------------------
// MemoryBackend

/// A [`ConfigBackend`] that keeps everything in a [`Mapping`].
///
/// Writes create missing parent mappings and replace scalar parents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryBackend {
    root: Mapping,
}

impl MemoryBackend {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    #[inline]
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    #[inline]
    pub fn into_mapping(self) -> Mapping {
        self.root
    }
}

impl From<Mapping> for MemoryBackend {
    #[inline]
    fn from(root: Mapping) -> Self {
        Self { root }
    }
}

impl ConfigBackend for MemoryBackend {
    fn get(&self, path: &str) -> Option<Value> {
        self.root.get_path(path).cloned()
    }

    fn set(&mut self, path: &str, value: Value) {
        log::trace!("set `{path}` = {value}");
        self.root.set_path(path, value);
    }

    fn to_map(&self) -> Mapping {
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{ConfigBackend, MemoryBackend};
    use crate::{Mapping, Value};

    #[test]
    fn set_replaces_scalar_parent() {
        let mut backend = MemoryBackend::new();
        backend.set("limits", Value::Int(3));
        backend.set("limits.max", Value::Int(10));

        assert_eq!(backend.get("limits.max"), Some(Value::Int(10)));
        assert!(backend.get("limits").is_some_and(|v| v.as_map().is_some()));
    }

    #[test]
    fn reborrowed_backend_forwards() {
        fn write_tags(mut backend: impl ConfigBackend) {
            backend.set("tags", Value::List(vec![Value::from("a")]));
        }

        let mut backend = MemoryBackend::from_mapping(Mapping::new());
        write_tags(&mut backend);

        let root = backend.into_mapping();
        assert_eq!(root.get("tags"), Some(&Value::List(vec![Value::from("a")])));
    }
}

use alloc::boxed::Box;
use core::any::Any;

use crate::Configurable;
use crate::info::TypeDescriptor;

// -----------------------------------------------------------------------------
// MapOps

/// A map from `String` keys to configurable values.
///
/// Like [`ListOps`], maps are loaded into a staged map from [`empty`] and
/// swapped in with [`assign`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_model::ops::MapOps;
///
/// let mut limits = BTreeMap::from([(String::from("a"), 1_u8)]);
///
/// let mut staged = limits.empty();
/// staged.insert_default("b");
/// staged.insert_default("c");
/// staged.discard("c");
/// limits.assign(staged);
///
/// let keys: Vec<&str> = MapOps::entries(&limits).map(|(k, _)| k).collect();
/// assert_eq!(keys, ["b"]);
/// ```
///
/// [`ListOps`]: crate::ops::ListOps
/// [`empty`]: MapOps::empty
/// [`assign`]: MapOps::assign
pub trait MapOps: Configurable {
    /// The descriptor of the value type.
    fn value_descriptor(&self) -> TypeDescriptor;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all entries in the map's own order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &dyn Configurable)> + '_>;

    /// Returns an empty map of the same concrete type.
    fn empty(&self) -> Box<dyn MapOps>;

    /// Inserts a default value under `key` and returns it for loading.
    fn insert_default(&mut self, key: &str) -> &mut dyn Configurable;

    /// Removes `key`, if present.
    fn discard(&mut self, key: &str);

    /// Replaces the whole content with a map built by [`MapOps::empty`].
    ///
    /// A map of a different concrete type is ignored.
    fn assign(&mut self, other: Box<dyn MapOps>);

    /// Upcasts the boxed map for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

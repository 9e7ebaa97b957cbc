use alloc::boxed::Box;
use core::any::Any;

use crate::Configurable;
use crate::info::TypeDescriptor;

// -----------------------------------------------------------------------------
// ListOps

/// An ordered, growable list of configurable elements.
///
/// Loading never edits a live list element by element. The engine builds
/// a staged list from [`empty`], fills it with [`push_default`] (dropping
/// rejected elements through [`discard_last`]) and swaps it in with
/// [`assign`] once the stored value has been fully read.
///
/// # Examples
///
/// ```
/// use vc_model::ops::{ConfigMut, ListOps};
/// use vc_model::Configurable;
///
/// let mut numbers: Vec<i64> = vec![1, 2, 3];
///
/// let mut staged = numbers.empty();
/// for value in [7, 8] {
///     let ConfigMut::Primitive(slot) = staged.push_default().config_mut() else {
///         unreachable!()
///     };
///     slot.set_value(&value.into());
/// }
/// numbers.assign(staged);
///
/// assert_eq!(numbers, [7, 8]);
/// ```
///
/// [`empty`]: ListOps::empty
/// [`push_default`]: ListOps::push_default
/// [`discard_last`]: ListOps::discard_last
/// [`assign`]: ListOps::assign
pub trait ListOps: Configurable {
    /// The descriptor of the element type.
    fn item_descriptor(&self) -> TypeDescriptor;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    fn item(&self, index: usize) -> Option<&dyn Configurable>;

    /// Returns an empty list of the same concrete type.
    fn empty(&self) -> Box<dyn ListOps>;

    /// Appends a default element and returns it for loading.
    fn push_default(&mut self) -> &mut dyn Configurable;

    /// Removes the last element, if any.
    fn discard_last(&mut self);

    /// Replaces the whole content with a list built by [`ListOps::empty`].
    ///
    /// A list of a different concrete type is ignored.
    fn assign(&mut self, other: Box<dyn ListOps>);

    /// Upcasts the boxed list for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

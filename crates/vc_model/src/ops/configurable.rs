use core::any::{Any, TypeId};

use crate::info::{Shape, TypeDescriptor};
use crate::ops::{EnumOps, ListOps, MapOps, Model, PrimitiveOps};

// -----------------------------------------------------------------------------
// Configurable

/// A type that can be stored in a configuration tree.
///
/// The static [`descriptor`] drives type-directed decisions that must be made
/// before a value exists, such as the shape of a list element. The dynamic
/// casts [`config_ref`] and [`config_mut`] drive traversal of live values.
///
/// Implementations exist for the primitives, `String`, `Vec<T>` and the
/// string-keyed maps. Model types and enums use the derive macros; types
/// with no generic representation use [`impl_opaque!`].
///
/// # Examples
///
/// ```
/// use vc_model::Configurable;
/// use vc_model::ops::ConfigRef;
///
/// let tags = vec![String::from("a"), String::from("b")];
/// let value: &dyn Configurable = &tags;
///
/// let ConfigRef::List(list) = value.config_ref() else {
///     unreachable!()
/// };
/// assert_eq!(list.len(), 2);
/// assert!(list.item(0).and_then(|v| v.downcast_ref::<String>()).is_some());
/// ```
///
/// [`descriptor`]: Configurable::descriptor
/// [`config_ref`]: Configurable::config_ref
/// [`config_mut`]: Configurable::config_mut
/// [`impl_opaque!`]: crate::impl_opaque
pub trait Configurable: Any + Send + Sync {
    /// Returns the descriptor of this type.
    fn descriptor() -> TypeDescriptor
    where
        Self: Sized;

    /// Returns the full name of the underlying type, for diagnostics.
    #[inline]
    fn config_type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Casts to the operation trait matching this type's shape.
    fn config_ref(&self) -> ConfigRef<'_>;

    /// Casts to the mutable operation trait matching this type's shape.
    fn config_mut(&mut self) -> ConfigMut<'_>;
}

impl dyn Configurable {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        let any: &dyn Any = self;
        any.type_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

// -----------------------------------------------------------------------------
// ConfigRef / ConfigMut

/// An immutable cast of a [`Configurable`] value.
pub enum ConfigRef<'a> {
    Primitive(&'a dyn PrimitiveOps),
    Enum(&'a dyn EnumOps),
    List(&'a dyn ListOps),
    Map(&'a dyn MapOps),
    Object(&'a dyn Model),
    Opaque(&'a dyn Configurable),
}

/// A mutable cast of a [`Configurable`] value.
pub enum ConfigMut<'a> {
    Primitive(&'a mut dyn PrimitiveOps),
    Enum(&'a mut dyn EnumOps),
    List(&'a mut dyn ListOps),
    Map(&'a mut dyn MapOps),
    Object(&'a mut dyn Model),
    Opaque(&'a mut dyn Configurable),
}

impl ConfigRef<'_> {
    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Primitive(_) => Shape::Primitive,
            Self::Enum(_) => Shape::Enum,
            Self::List(_) => Shape::List,
            Self::Map(_) => Shape::Map,
            Self::Object(_) => Shape::Object,
            Self::Opaque(_) => Shape::Opaque,
        }
    }
}

impl ConfigMut<'_> {
    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Primitive(_) => Shape::Primitive,
            Self::Enum(_) => Shape::Enum,
            Self::List(_) => Shape::List,
            Self::Map(_) => Shape::Map,
            Self::Object(_) => Shape::Object,
            Self::Opaque(_) => Shape::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// Cast helpers

/// Implements `config_ref` and `config_mut` for a single shape.
macro_rules! impl_config_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn config_ref(&self) -> $crate::ops::ConfigRef<'_> {
            $crate::ops::ConfigRef::$kind(self)
        }

        #[inline]
        fn config_mut(&mut self) -> $crate::ops::ConfigMut<'_> {
            $crate::ops::ConfigMut::$kind(self)
        }
    };
}

pub(crate) use impl_config_cast_fn;

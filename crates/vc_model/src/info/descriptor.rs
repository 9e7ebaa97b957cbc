use core::fmt;

use crate::info::{EnumInfo, ModelInfo};

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The wire primitive a [`TypeDescriptor::Primitive`] field maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Float,
    String,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Float => f.pad("Float"),
            Self::String => f.pad("String"),
        }
    }
}

// -----------------------------------------------------------------------------
// Shape

/// The payload-free tag of a [`TypeDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Primitive,
    Enum,
    List,
    Map,
    Object,
    Opaque,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Enum => f.pad("Enum"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Object => f.pad("Object"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The classification of a field's static type.
///
/// Lists and maps describe their element type lazily through a function
/// pointer; the element itself may be any descriptor, including another
/// container.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_model::Configurable;
/// use vc_model::info::{PrimitiveKind, Shape};
///
/// let list = <Vec<u8> as Configurable>::descriptor();
/// assert_eq!(list.shape(), Shape::List);
/// assert_eq!(list.item().and_then(|d| d.primitive_kind()), Some(PrimitiveKind::Int));
///
/// let map = <BTreeMap<String, Vec<String>> as Configurable>::descriptor();
/// assert_eq!(map.item().map(|d| d.shape()), Some(Shape::List));
/// assert!(!map.is_scalar());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum TypeDescriptor {
    /// `bool`, integers, floats and `String`.
    Primitive(PrimitiveKind),
    /// An enumeration stored by member name.
    Enum(&'static EnumInfo),
    /// An ordered list; the payload yields the element descriptor.
    List(fn() -> TypeDescriptor),
    /// A string-keyed map; the payload yields the value descriptor.
    Map(fn() -> TypeDescriptor),
    /// A nested model type.
    Object(fn() -> &'static ModelInfo),
    /// A type with no generic representation; only hooks can store it.
    /// The payload yields the type name for diagnostics.
    Opaque(fn() -> &'static str),
}

impl TypeDescriptor {
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

    /// Returns `true` for primitives and enums, which are stored as single
    /// leaf values.
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Primitive(_) | Self::Enum(_))
    }

    /// The element descriptor of a list, or the value descriptor of a map.
    #[inline]
    pub fn item(&self) -> Option<TypeDescriptor> {
        match self {
            Self::List(item) | Self::Map(item) => Some(item()),
            _ => None,
        }
    }

    #[inline]
    pub fn model_info(&self) -> Option<&'static ModelInfo> {
        match self {
            Self::Object(info) => Some(info()),
            _ => None,
        }
    }

    #[inline]
    pub const fn enum_info(&self) -> Option<&'static EnumInfo> {
        match self {
            Self::Enum(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` for integer and float primitives.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Primitive(PrimitiveKind::Int | PrimitiveKind::Float)
        )
    }
}

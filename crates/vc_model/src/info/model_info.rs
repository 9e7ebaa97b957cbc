use alloc::boxed::Box;
use core::any::TypeId;

use crate::Model;
use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// ModelKind

/// How instances of a model type are owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelKind {
    /// Each occurrence is an independent value, rebuilt from its default
    /// whenever it is loaded.
    #[default]
    Value,
    /// One canonical instance that is mutated in place.
    Singleton,
}

impl ModelKind {
    #[inline]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

// -----------------------------------------------------------------------------
// ModelInfo

/// The field table of a model type.
///
/// Fields are kept in declaration order; their index is the one accepted by
/// [`Model::field`] and [`Model::field_mut`].
///
/// # Examples
///
/// ```
/// use vc_model::{Model, ModelKind};
///
/// #[derive(Model, Default)]
/// #[model(singleton)]
/// struct Settings {
///     verbose: bool,
///     #[model(skip)]
///     cache: Vec<u8>,
///     name: String,
/// }
///
/// let info = Settings::info();
/// assert_eq!(info.kind(), ModelKind::Singleton);
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_index("name"), Some(1));
/// assert!(info.field("cache").is_none());
/// assert!(info.type_name().ends_with("Settings"));
/// ```
#[derive(Debug)]
pub struct ModelInfo {
    type_id: TypeId,
    type_name: fn() -> &'static str,
    kind: ModelKind,
    fields: &'static [FieldInfo],
    default: fn() -> Box<dyn Model>,
}

fn boxed_default<T: Model + Default>() -> Box<dyn Model> {
    Box::new(T::default())
}

impl ModelInfo {
    /// Creates a new [`ModelInfo`] for `T`.
    #[inline]
    pub const fn new<T: Model + Default>(kind: ModelKind, fields: &'static [FieldInfo]) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>,
            kind,
            fields,
            default: boxed_default::<T>,
        }
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline]
    pub const fn kind(&self) -> ModelKind {
        self.kind
    }

    #[inline]
    pub const fn is_singleton(&self) -> bool {
        self.kind.is_singleton()
    }

    /// All configurable fields, in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Builds a fresh default instance of the model type.
    #[inline]
    pub fn default_instance(&self) -> Box<dyn Model> {
        (self.default)()
    }
}

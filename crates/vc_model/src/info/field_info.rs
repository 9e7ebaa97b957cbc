use core::any::TypeId;

use crate::Configurable;
use crate::info::TypeDescriptor;

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a configurable field of a model.
///
/// # Examples
///
/// ```
/// use vc_model::Model;
/// use vc_model::info::Shape;
///
/// #[derive(Model, Default)]
/// struct Limits {
///     /// Upper bound, in requests per second.
///     max: u32,
///     #[model(rename = "allow-list")]
///     allow: Vec<String>,
/// }
///
/// let info = Limits::info();
/// let max = info.field("max").unwrap();
/// assert!(max.type_is::<u32>());
/// assert_eq!(max.description(), Some("Upper bound, in requests per second."));
///
/// let allow = info.field_at(1).unwrap();
/// assert_eq!(allow.name(), "allow-list");
/// assert_eq!(allow.descriptor().shape(), Shape::List);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    description: Option<&'static str>,
    type_id: TypeId,
    type_name: fn() -> &'static str,
    // Resolved on access, so a table may name types whose tables are not built yet.
    descriptor: fn() -> TypeDescriptor,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Configurable>(name: &'static str) -> Self {
        Self {
            name,
            description: None,
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>,
            descriptor: T::descriptor,
        }
    }

    /// Attaches a human-readable description.
    #[inline]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// The key this field is stored under.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn description(&self) -> Option<&'static str> {
        self.description
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this field's type.
    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline]
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.descriptor)()
    }
}

use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// EnumInfo

/// The member table of a configuration enum.
///
/// Member names are the symbolic names written to the configuration tree,
/// in declaration order. Lookups are case-sensitive.
///
/// # Examples
///
/// ```
/// use vc_model::ConfigEnum;
///
/// #[derive(ConfigEnum)]
/// enum Level {
///     Low,
///     #[model(rename = "max")]
///     High,
/// }
///
/// let info = Level::enum_info();
/// assert_eq!(info.variants(), ["Low", "max"]);
/// assert!(info.contains("max"));
/// assert!(!info.contains("MAX"));
/// ```
#[derive(Debug)]
pub struct EnumInfo {
    type_id: TypeId,
    type_name: fn() -> &'static str,
    variants: &'static [&'static str],
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`] for `T` with the given member names.
    #[inline]
    pub const fn new<T: Any>(variants: &'static [&'static str]) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>,
            variants,
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

    /// Member names in declaration order.
    #[inline]
    pub const fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains(&name)
    }

    /// Returns the declaration index of a member.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| *v == name)
    }
}

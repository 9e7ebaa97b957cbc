use crate::Configurable;
use crate::info::EnumInfo;

// -----------------------------------------------------------------------------
// ConfigEnum

/// An enumeration stored by the symbolic name of its current member.
///
/// Normally derived with [`derive::ConfigEnum`], which only accepts
/// enums whose variants carry no data.
///
/// # Examples
///
/// ```
/// use vc_model::ConfigEnum;
///
/// #[derive(ConfigEnum, Debug, PartialEq)]
/// #[model(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum Mode {
///     ReadOnly,
///     ReadWrite,
/// }
///
/// assert_eq!(Mode::ReadWrite.variant_name(), "READ_WRITE");
/// assert_eq!(Mode::from_variant_name("READ_ONLY"), Some(Mode::ReadOnly));
/// assert_eq!(Mode::from_variant_name("read_only"), None);
/// ```
///
/// [`derive::ConfigEnum`]: crate::derive::ConfigEnum
pub trait ConfigEnum: Configurable + Sized {
    /// Returns the member table of this enum.
    fn enum_info() -> &'static EnumInfo;

    /// Returns the stored name of the current member.
    fn variant_name(&self) -> &'static str;

    /// Looks a member up by its stored name, case-sensitively.
    fn from_variant_name(name: &str) -> Option<Self>;
}

// -----------------------------------------------------------------------------
// EnumOps

/// The object-safe side of [`ConfigEnum`].
pub trait EnumOps: Configurable {
    /// The member table of the underlying enum.
    fn info(&self) -> &'static EnumInfo;

    /// The stored name of the current member.
    fn name(&self) -> &'static str;

    /// Switches to the member called `name`.
    ///
    /// Returns `false` and leaves `self` untouched if no member has that name.
    fn select(&mut self, name: &str) -> bool;
}

impl<T: ConfigEnum> EnumOps for T {
    #[inline]
    fn info(&self) -> &'static EnumInfo {
        T::enum_info()
    }

    #[inline]
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn select(&mut self, name: &str) -> bool {
        match T::from_variant_name(name) {
            Some(value) => {
                *self = value;
                true
            }
            None => false,
        }
    }
}

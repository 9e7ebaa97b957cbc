use vc_tree::Value;

use crate::Configurable;
use crate::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// PrimitiveOps

/// A leaf value stored as a single wire primitive.
///
/// Writing never fails. Reading accepts a stored value only if it fits the
/// declared type: integers must be in range (integral floats count as
/// integers), floats accept any number, strings and booleans require the
/// exact kind.
///
/// # Examples
///
/// ```
/// use vc_model::ops::PrimitiveOps;
/// use vc_tree::Value;
///
/// let mut port = 0_u16;
/// assert!(port.set_value(&Value::Float(8080.0)));
/// assert_eq!(port, 8080);
///
/// assert!(!port.set_value(&Value::Int(-1)));
/// assert!(!port.set_value(&Value::Float(1.5)));
/// assert!(!port.set_value(&Value::from("80")));
/// assert_eq!(port.to_value(), Value::Int(8080));
///
/// let mut ratio = 0.0_f32;
/// assert!(ratio.set_value(&Value::Int(2)));
/// assert_eq!(ratio, 2.0);
/// ```
pub trait PrimitiveOps: Configurable {
    /// The wire primitive this type is stored as.
    fn kind(&self) -> PrimitiveKind;

    /// Encodes the current value.
    fn to_value(&self) -> Value;

    /// Replaces the current value with `value` if it fits.
    ///
    /// Returns `false` and leaves `self` untouched otherwise.
    fn set_value(&mut self, value: &Value) -> bool;
}

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Mapping;

// -----------------------------------------------------------------------------
// ValueKind

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Float => f.pad("Float"),
            Self::String => f.pad("String"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
        }
    }
}

// -----------------------------------------------------------------------------
// Value

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// A node of the configuration tree.
///
/// Numbers are stored without a fixed width: every integer is an `i64` and
/// every floating value an `f64`. Narrowing to a declared field width is the
/// job of the reader.
///
/// # Examples
///
/// ```
/// use vc_tree::{Value, ValueKind};
///
/// let port = Value::from(8080_u16);
/// assert_eq!(port.kind(), ValueKind::Int);
/// assert_eq!(port.as_float(), Some(8080.0));
///
/// let tags = Value::from(vec![Value::from("a"), Value::from("b")]);
/// assert!(tags.is_scalar_list());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Mapping),
}

impl Value {
    /// Returns the [`ValueKind`] of this node.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Returns `true` for booleans, numbers and strings.
    #[inline]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    /// Returns `true` for integers and floats.
    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns `true` if this is a list whose elements are all primitives.
    pub fn is_scalar_list(&self) -> bool {
        match self {
            Self::List(items) => items.iter().all(Value::is_primitive),
            _ => false,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer payload, or an integral float that fits in `i64`.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
            Self::Float(v) if v.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&v) => Some(v as i64),
            _ => None,
        }
    }

    /// Returns a non-negative integer payload, or an integral float that fits
    /// in `u64`.
    ///
    /// `u64::MAX as f64` is 2^64, so that float reads back as `u64::MAX`.
    pub fn as_uint(&self) -> Option<u64> {
        match *self {
            Self::Int(v) => u64::try_from(v).ok(),
            Self::Float(v) if v.fract() == 0.0 && (0.0..=TWO_POW_64).contains(&v) => Some(v as u64),
            _ => None,
        }
    }

    /// Returns any number widened to `f64`.
    #[inline]
    pub const fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Int(v) => Some(v as f64),
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(map) => write!(f, "{map:?}"),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Mapping> for Value {
    #[inline]
    fn from(value: Mapping) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn integral_floats_read_as_ints() {
        assert_eq!(Value::Float(3.0).as_int(), Some(3));
        assert_eq!(Value::Float(3.5).as_int(), None);
        assert_eq!(Value::Float(f64::NAN).as_int(), None);
        assert_eq!(Value::Float(1e300).as_int(), None);
        assert_eq!(Value::Float(f64::INFINITY).as_int(), None);
        assert_eq!(Value::Float(9_223_372_036_854_775_808.0).as_int(), None);
        assert_eq!(Value::Float(-9_223_372_036_854_775_808.0).as_int(), Some(i64::MIN));
        assert_eq!(Value::from("3").as_int(), None);
    }

    #[test]
    fn unsigned_reads_cover_the_whole_u64_range() {
        assert_eq!(Value::Int(-1).as_uint(), None);
        assert_eq!(Value::Int(42).as_uint(), Some(42));
        assert_eq!(Value::Float(9_223_372_036_854_775_808.0).as_uint(), Some(1 << 63));
        assert_eq!(Value::Float(u64::MAX as f64).as_uint(), Some(u64::MAX));
        assert_eq!(Value::Float(36_893_488_147_419_103_232.0).as_uint(), None);
        assert_eq!(Value::Float(18_446_744_073_709_549_568.0).as_uint(), Some(18_446_744_073_709_549_568));
        assert_eq!(Value::Float(-3.0).as_uint(), None);
        assert_eq!(Value::Float(2.5).as_uint(), None);
    }

    #[test]
    fn ints_widen_to_floats() {
        assert_eq!(Value::Int(7).as_float(), Some(7.0));
        assert_eq!(Value::Bool(true).as_float(), None);
    }
}

use alloc::string::String;

use vc_tree::Value;

use crate::info::{PrimitiveKind, TypeDescriptor};
use crate::ops::{Configurable, PrimitiveOps, impl_config_cast_fn};

macro_rules! impl_primitive {
    ($ty:ty, $kind:ident, |$this:ident| $to_value:expr, |$value:ident| $from_value:expr) => {
        impl Configurable for $ty {
            #[inline]
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::Primitive(PrimitiveKind::$kind)
            }

            impl_config_cast_fn!(Primitive);
        }

        impl PrimitiveOps for $ty {
            #[inline]
            fn kind(&self) -> PrimitiveKind {
                PrimitiveKind::$kind
            }

            #[inline]
            fn to_value(&self) -> Value {
                let $this = self;
                $to_value
            }

            fn set_value(&mut self, $value: &Value) -> bool {
                let parsed: Option<$ty> = $from_value;
                match parsed {
                    Some(parsed) => {
                        *self = parsed;
                        true
                    }
                    None => false,
                }
            }
        }
    };
}

macro_rules! impl_integer {
    ($read:ident => $($ty:ty),* $(,)?) => {
        $(
            impl_primitive!(
                $ty,
                Int,
                |this| i64::try_from(*this).map_or_else(
                    |_| {
                        log::warn!(
                            "{} value {this} exceeds the integer range and is written as a float",
                            core::any::type_name::<$ty>(),
                        );
                        Value::Float(*this as f64)
                    },
                    Value::Int,
                ),
                |value| value.$read().and_then(|v| <$ty>::try_from(v).ok())
            );
        )*
    };
}

impl_integer!(as_int => i8, i16, i32, i64, isize);
impl_integer!(as_uint => u8, u16, u32, u64, usize);

impl_primitive!(
    f32,
    Float,
    |this| Value::Float(f64::from(*this)),
    |value| value.as_float().and_then(|v| {
        let narrowed = v as f32;
        (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
    })
);

impl_primitive!(
    f64,
    Float,
    |this| Value::Float(*this),
    |value| value.as_float()
);

impl_primitive!(
    bool,
    Bool,
    |this| Value::Bool(*this),
    |value| value.as_bool()
);

impl_primitive!(
    String,
    String,
    |this| Value::String(this.clone()),
    |value| value.as_str().map(String::from)
);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use vc_tree::Value;

    use crate::ops::PrimitiveOps;

    #[test]
    fn integers_reject_out_of_range() {
        let mut small = 0_i8;
        assert!(!small.set_value(&Value::Int(300)));
        assert!(small.set_value(&Value::Int(-128)));
        assert_eq!(small, -128);
    }

    #[test]
    fn huge_unsigned_is_written_as_float() {
        assert_eq!(u64::MAX.to_value(), Value::Float(u64::MAX as f64));
        assert_eq!(7_usize.to_value(), Value::Int(7));
    }

    #[test]
    fn huge_unsigned_reads_back() {
        for original in [1_u64 << 63, u64::MAX, u64::from(u32::MAX) + 1] {
            let mut back = 0_u64;
            assert!(back.set_value(&original.to_value()));
            assert_eq!(back, original);
        }

        let mut byte = 0_u8;
        assert!(!byte.set_value(&Value::Int(-1)));
        assert!(byte.set_value(&Value::Float(255.0)));
        assert_eq!(byte, 255);
    }

    #[test]
    fn f32_rejects_values_out_of_its_range() {
        let mut ratio = 0.5_f32;
        assert!(!ratio.set_value(&Value::Float(1e300)));
        assert!(!ratio.set_value(&Value::Float(-1e300)));
        assert_eq!(ratio, 0.5);

        assert!(ratio.set_value(&Value::Float(f64::INFINITY)));
        assert_eq!(ratio, f32::INFINITY);
        assert!(ratio.set_value(&Value::Int(3)));
        assert_eq!(ratio, 3.0);
    }

    #[test]
    fn strings_and_bools_need_exact_kind() {
        let mut name = String::from("a");
        assert!(!name.set_value(&Value::Int(1)));
        assert!(name.set_value(&Value::from("b")));
        assert_eq!(name, "b");

        let mut flag = false;
        assert!(!flag.set_value(&Value::from("true")));
        assert!(flag.set_value(&Value::Bool(true)));
        assert!(flag);
    }
}

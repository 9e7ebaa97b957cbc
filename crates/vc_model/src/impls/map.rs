use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::any::Any;
use core::hash::BuildHasher;
#[cfg(feature = "std")]
use std::collections::HashMap as StdHashMap;

use hashbrown::HashMap as HashbrownMap;
use indexmap::IndexMap;

use crate::info::TypeDescriptor;
use crate::ops::{Configurable, MapOps, impl_config_cast_fn};

macro_rules! impl_string_map {
    ($ty:ident < String, T $(, $s:ident)? >, $new:expr, $discard:ident) => {
        impl<T, $($s)?> Configurable for $ty<String, T $(, $s)?>
        where
            T: Configurable + Default,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            #[inline]
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::Map(T::descriptor)
            }

            impl_config_cast_fn!(Map);
        }

        impl<T, $($s)?> MapOps for $ty<String, T $(, $s)?>
        where
            T: Configurable + Default,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            #[inline]
            fn value_descriptor(&self) -> TypeDescriptor {
                T::descriptor()
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn entries(&self) -> Box<dyn Iterator<Item = (&str, &dyn Configurable)> + '_> {
                Box::new(
                    self.iter()
                        .map(|(key, value)| (key.as_str(), value as &dyn Configurable)),
                )
            }

            #[inline]
            fn empty(&self) -> Box<dyn MapOps> {
                let empty: Self = $new;
                Box::new(empty)
            }

            fn insert_default(&mut self, key: &str) -> &mut dyn Configurable {
                self.entry(String::from(key)).or_default()
            }

            #[inline]
            fn discard(&mut self, key: &str) {
                self.$discard(key);
            }

            fn assign(&mut self, other: Box<dyn MapOps>) {
                match other.into_any().downcast::<Self>() {
                    Ok(map) => *self = *map,
                    Err(_) => log::warn!(
                        "cannot assign a map of another type to `{}`",
                        core::any::type_name::<Self>(),
                    ),
                }
            }

            #[inline]
            fn into_any(self: Box<Self>) -> Box<dyn Any> {
                self
            }
        }
    };
}

impl_string_map!(BTreeMap<String, T>, BTreeMap::new(), remove);

impl_string_map!(HashbrownMap<String, T, S>, HashbrownMap::with_hasher(S::default()), remove);

impl_string_map!(IndexMap<String, T, S>, IndexMap::with_hasher(S::default()), shift_remove);

#[cfg(feature = "std")]
impl_string_map!(StdHashMap<String, T, S>, StdHashMap::with_hasher(S::default()), remove);

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use foldhash::fast::FixedState;
    use indexmap::IndexMap;

    use crate::ops::MapOps;

    #[test]
    fn index_map_discard_keeps_order() {
        let mut map: IndexMap<String, u8, FixedState> = IndexMap::default();
        map.insert_default("a");
        map.insert_default("b");
        map.insert_default("c");
        map.discard("b");

        let keys: Vec<&str> = MapOps::entries(&map).map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "c"]);
    }
}

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;

use crate::info::TypeDescriptor;
use crate::ops::{Configurable, ListOps, impl_config_cast_fn};

impl<T: Configurable + Default> Configurable for Vec<T> {
    #[inline]
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(T::descriptor)
    }

    impl_config_cast_fn!(List);
}

impl<T: Configurable + Default> ListOps for Vec<T> {
    #[inline]
    fn item_descriptor(&self) -> TypeDescriptor {
        T::descriptor()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&dyn Configurable> {
        self.as_slice().get(index).map(|v| v as &dyn Configurable)
    }

    #[inline]
    fn empty(&self) -> Box<dyn ListOps> {
        Box::new(Vec::<T>::new())
    }

    fn push_default(&mut self) -> &mut dyn Configurable {
        self.push(T::default());
        let index = Vec::len(self) - 1;
        &mut self[index]
    }

    #[inline]
    fn discard_last(&mut self) {
        self.pop();
    }

    fn assign(&mut self, other: Box<dyn ListOps>) {
        match other.into_any().downcast::<Self>() {
            Ok(list) => *self = *list,
            Err(_) => log::warn!(
                "cannot assign a list of another type to `{}`",
                core::any::type_name::<Self>(),
            ),
        }
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

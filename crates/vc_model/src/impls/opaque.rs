/// Implements [`Configurable`] for a type with no generic representation.
///
/// An opaque field can only be stored through a [`FieldHook`]. Without one,
/// every engine call that reaches it fails with
/// [`ModelError::UnsupportedShape`].
///
/// # Examples
///
/// ```
/// use vc_model::{HookTable, Model, ModelError, impl_opaque};
///
/// #[derive(Default)]
/// struct Handle(u64);
///
/// impl_opaque!(Handle);
///
/// #[derive(Model, Default)]
/// struct Session {
///     handle: Handle,
/// }
///
/// let err = vc_model::to_map(&Session::default(), &HookTable::new()).unwrap_err();
/// assert!(matches!(err, ModelError::UnsupportedShape { .. }));
/// assert_eq!(err.path(), "handle");
/// ```
///
/// [`Configurable`]: crate::Configurable
/// [`FieldHook`]: crate::FieldHook
/// [`ModelError::UnsupportedShape`]: crate::ModelError::UnsupportedShape
#[macro_export]
macro_rules! impl_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Configurable for $ty {
                #[inline]
                fn descriptor() -> $crate::info::TypeDescriptor {
                    $crate::info::TypeDescriptor::Opaque(::core::any::type_name::<Self>)
                }

                #[inline]
                fn config_ref(&self) -> $crate::ops::ConfigRef<'_> {
                    $crate::ops::ConfigRef::Opaque(self)
                }

                #[inline]
                fn config_mut(&mut self) -> $crate::ops::ConfigMut<'_> {
                    $crate::ops::ConfigMut::Opaque(self)
                }
            }
        )+
    };
}

impl_opaque!(core::time::Duration, core::net::IpAddr, core::net::SocketAddr);

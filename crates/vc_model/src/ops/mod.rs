//! Dynamic access traits used by the engine.
//!
//! ## Menu
//!
//! - [`Configurable`]: implemented by every type that may appear as a field.
//!   It reports a [`TypeDescriptor`] and casts itself to one of the
//!   operation traits below through [`ConfigRef`] / [`ConfigMut`].
//! - [`PrimitiveOps`]: conversion between a primitive and a wire [`Value`].
//! - [`EnumOps`]: read and select an enum member by name; implemented for
//!   every [`ConfigEnum`].
//! - [`ListOps`]: element access and staged rebuilding of ordered lists.
//! - [`MapOps`]: entry access and staged rebuilding of string-keyed maps.
//! - [`Model`]: indexed field access of a model type, normally derived.
//!
//! [`TypeDescriptor`]: crate::info::TypeDescriptor
//! [`Value`]: vc_tree::Value

// -----------------------------------------------------------------------------
// Modules

mod configurable;
mod enum_ops;
mod list_ops;
mod map_ops;
mod model_ops;
mod primitive_ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use configurable::impl_config_cast_fn;

// -----------------------------------------------------------------------------
// Exports

pub use configurable::{ConfigMut, ConfigRef, Configurable};
pub use enum_ops::{ConfigEnum, EnumOps};
pub use list_ops::ListOps;
pub use map_ops::MapOps;
pub use model_ops::Model;
pub use primitive_ops::PrimitiveOps;

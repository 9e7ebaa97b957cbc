//! [`Configurable`] implementations for foreign types.
//!
//! [`Configurable`]: crate::Configurable

mod list;
mod map;
mod opaque;
mod primitive;

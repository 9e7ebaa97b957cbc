//! Compile-time descriptor tables.
//!
//! ## Menu
//!
//! - [`TypeDescriptor`]: classifies a field's static type into one of the
//!   supported shapes and exposes its element, value or model descriptors.
//!     - [`PrimitiveKind`]: the four wire primitives.
//!     - [`Shape`]: the tag of a descriptor, without payload.
//!
//! - [`ModelInfo`]: a model type's field table, its [`ModelKind`] and a
//!   constructor for its default instance.
//!
//! - [`FieldInfo`]: one configurable field: name, optional description and
//!   the field type's descriptor.
//!
//! - [`EnumInfo`]: the symbolic member names of an enumeration.
//!
//! All tables are `'static` and built in `const` context by the derive macros.
//! Descriptors of other types are stored as function pointers, so a table
//! never needs its dependencies to be built first.

// -----------------------------------------------------------------------------
// Modules

mod descriptor;
mod enum_info;
mod field_info;
mod model_info;

// -----------------------------------------------------------------------------
// Exports

pub use descriptor::{PrimitiveKind, Shape, TypeDescriptor};
pub use enum_info::EnumInfo;
pub use field_info::FieldInfo;
pub use model_info::{ModelInfo, ModelKind};

//! Converts typed configuration models to and from configuration trees.
//!
//! ## Menu
//!
//! - [`info`]: compile-time descriptor tables ([`ModelInfo`], [`FieldInfo`],
//!   [`EnumInfo`]) and the [`TypeDescriptor`] classifying every field type.
//! - [`ops`]: the dynamic access traits behind the engine ([`Configurable`],
//!   [`Model`], [`ConfigEnum`] and the list/map/primitive operations).
//! - [`hook`]: per-field save/load transforms kept in a [`HookTable`].
//! - [`to_map`], [`from_map`], [`load_into`]: full conversions.
//! - [`compute_patch`]: the writes needed to backfill defaults into a
//!   persisted tree without touching values already there.
//! - [`save_to`], [`load_from`], [`load_and_set_default`]: the same
//!   operations against a [`ConfigBackend`].
//!
//! ## Example
//!
//! ```
//! use vc_model::{ConfigEnum, HookTable, Model};
//! use vc_tree::{Mapping, Value};
//!
//! #[derive(ConfigEnum, Default, Debug, PartialEq)]
//! #[model(rename_all = "UPPERCASE")]
//! enum Color {
//!     #[default]
//!     Red,
//!     Blue,
//! }
//!
//! #[derive(Model, Default, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! #[derive(Model, Default, Debug, PartialEq)]
//! struct Canvas {
//!     /// Background color.
//!     color: Color,
//!     points: Vec<Point>,
//! }
//!
//! let hooks = HookTable::new();
//! let canvas = Canvas {
//!     color: Color::Blue,
//!     points: vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }],
//! };
//!
//! let tree = vc_model::to_map(&canvas, &hooks).unwrap();
//! assert_eq!(tree.get("color"), Some(&Value::from("BLUE")));
//! assert_eq!(tree.get_path("points.1.x"), Some(&Value::Int(3)));
//!
//! let back: Canvas = vc_model::from_map(&tree, &hooks).unwrap();
//! assert_eq!(back, canvas);
//!
//! let empty: Canvas = vc_model::from_map(&Mapping::new(), &hooks).unwrap();
//! assert_eq!(empty, Canvas::default());
//! ```
//!
//! [`ConfigBackend`]: vc_tree::ConfigBackend
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names `::vc_model`, which must also resolve inside this crate.
extern crate self as vc_model;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod de;
mod error;
mod impls;
mod merge;
mod ser;
mod store;
mod validate;

pub mod hook;
pub mod info;
pub mod ops;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use vc_model_derive as derive;
pub use vc_model_derive::{ConfigEnum, Model};

pub use de::{from_map, load_into};
pub use error::ModelError;
pub use hook::{FieldHook, HookTable};
pub use info::{EnumInfo, FieldInfo, ModelInfo, ModelKind, TypeDescriptor};
pub use merge::compute_patch;
pub use ops::{ConfigEnum, Configurable, Model};
pub use ser::to_map;
pub use store::{load_and_set_default, load_from, save_to};
pub use validate::check_acyclic;

//! The configuration tree: the wire representation shared by every
//! configuration backend and the model engine.
//!
//! A configuration document is a [`Mapping`] from string keys to [`Value`]s.
//! Leaves are booleans, integers, floats, strings or literal lists;
//! intermediate nodes are nested mappings.
//!
//! ```
//! use vc_tree::{Mapping, Value};
//!
//! let mut root = Mapping::new();
//! root.set_path("server.port", 8080);
//! root.set_path("server.host", "localhost");
//!
//! assert_eq!(root.get_path("server.port"), Some(&Value::Int(8080)));
//! assert_eq!(root.flatten().len(), 2);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod mapping;
mod value;

pub mod backend;
pub mod path;

#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Top-level exports

pub use backend::{ConfigBackend, MemoryBackend};
pub use mapping::Mapping;
pub use path::{PathEntry, Patch, Segment};
pub use value::{Value, ValueKind};

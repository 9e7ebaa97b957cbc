//! Typed configuration models stored as nested key/value trees.
//!
//! - [`tree`]: the wire representation ([`tree::Mapping`], [`tree::Value`]),
//!   dotted paths and the [`tree::ConfigBackend`] storage seam.
//! - [`model`]: the model engine converting between typed structs and trees,
//!   with the `Model` and `ConfigEnum` derives. Types deriving through this
//!   crate name it with `#[model(crate_path = "vc_config::model")]`.
//!
//! ```
//! use vc_config::model::{self, HookTable, Model};
//!
//! #[derive(Model, Default, Debug, PartialEq)]
//! #[model(crate_path = "vc_config::model")]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let hooks = HookTable::new();
//! let server = Server { host: "localhost".into(), port: 8080 };
//!
//! let tree = model::to_map(&server, &hooks).unwrap();
//! let back: Server = model::from_map(&tree, &hooks).unwrap();
//! assert_eq!(back, server);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_model as model;
pub use vc_tree as tree;

//! Derive macros for `vc_model`.
//!
//! - [`Model`]
//! - [`ConfigEnum`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static MODEL_ATTRIBUTE_NAME: &str = "model";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod config_enum;
mod model;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Model Derivation
///
/// `#[derive(Model)]` implements `Configurable` and `Model` for a struct
/// with named fields, backed by a static `ModelInfo` that lists the stored
/// fields in declaration order.
///
/// The struct must implement `Default` (used to rebuild value models and
/// to compare singletons against their pristine state) and every stored
/// field type must implement `Configurable`. Generic structs are not
/// supported.
///
/// ## Type Attributes
///
/// ### Singleton
///
/// ```rust, ignore
/// #[derive(Model, Default)]
/// #[model(singleton)]
/// struct Registry { /* ... */ }
/// ```
///
/// A singleton is loaded in place instead of being rebuilt, is not walked
/// by the cycle check, and is skipped by default merging while it still
/// equals its default instance.
///
/// ### Crate Path
///
/// Generated code names `::vc_model`. A crate that only depends on a
/// re-export provides the path:
///
/// ```rust, ignore
/// #[derive(Model, Default)]
/// #[model(crate_path = "vc_config::model")]
/// struct Server { /* ... */ }
/// ```
///
/// ## Field Attributes
///
/// - `#[model(skip)]`: the field is not stored and keeps its value.
/// - `#[model(rename = "...")]`: the key the field is stored under. It
///   cannot contain `.`.
/// - `#[model(description = "...")]`: the text of
///   `FieldInfo::description`. Without it, the field's doc comment is used.
///
/// ```rust, ignore
/// #[derive(Model, Default)]
/// struct Limits {
///     /// Upper bound of concurrent requests.
///     #[model(rename = "max-requests")]
///     max_requests: u32,
///     #[model(skip)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    model::impl_model(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// # Enumeration Derivation
///
/// `#[derive(ConfigEnum)]` implements `Configurable` and `ConfigEnum` for
/// an enum whose variants carry no data. Values are stored by name, and
/// loading only accepts an exact, case-sensitive name.
///
/// ## Attributes
///
/// - `#[model(rename_all = "...")]` on the enum converts every variant
///   name. Accepted rules: `lowercase`, `UPPERCASE`, `snake_case`,
///   `SCREAMING_SNAKE_CASE` and `kebab-case`.
/// - `#[model(rename = "...")]` on a variant overrides its stored name.
/// - `#[model(crate_path = "...")]` as for [`Model`].
///
/// ```rust, ignore
/// #[derive(ConfigEnum, Default)]
/// #[model(rename_all = "lowercase")]
/// enum Level {
///     #[default]
///     Info,
///     #[model(rename = "warn")]
///     Warning,
/// }
/// ```
#[proc_macro_derive(ConfigEnum, attributes(model))]
pub fn derive_config_enum(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    config_enum::impl_config_enum(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

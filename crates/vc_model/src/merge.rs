use alloc::string::ToString;
use alloc::vec::Vec;

use vc_tree::{Mapping, PathEntry, Patch, Value};

use crate::ops::ConfigRef;
use crate::ser::{encode_model, encode_value};
use crate::{Configurable, HookTable, Model, ModelError, check_acyclic};

// -----------------------------------------------------------------------------
// compute_patch

/// Computes the writes that backfill `defaults` into a persisted tree.
///
/// Values already present in `persisted` are never overwritten, and a
/// present structure is never replaced by a flatter one:
///
/// - primitives, enums and hook-saved fields are written only when absent;
/// - an absent list of primitives or enums is written as one literal list;
///   other absent lists and maps are written leaf by leaf under
///   `field.<index>` or `field.<key>`. Empty lists and maps are not written,
///   neither as the field itself nor nested inside its elements. A list or
///   map that is present in any form is left alone;
/// - nested models are merged recursively into a present mapping, written
///   in full when absent, and left alone when present as something else;
/// - outside a singleton, a nested singleton that still encodes exactly
///   like its type's default instance is skipped entirely.
///
/// Patches are returned in field declaration order.
///
/// # Errors
///
/// - [`ModelError::CyclicModel`] if the model type contains itself.
/// - [`ModelError::UnsupportedShape`] for an absent opaque field with no
///   save hook.
///
/// # Examples
///
/// ```
/// use vc_model::{HookTable, Model};
/// use vc_tree::{Mapping, Patch, Value};
///
/// #[derive(Model, Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     tags: Vec<String>,
/// }
///
/// let defaults = Server {
///     host: "localhost".into(),
///     port: 8080,
///     tags: vec!["web".into()],
/// };
///
/// let persisted: Mapping = serde_json::from_str(r#"{ "port": 9000 }"#).unwrap();
/// let patches = vc_model::compute_patch(&defaults, &persisted, &HookTable::new()).unwrap();
///
/// assert_eq!(
///     patches,
///     [
///         Patch::new("host", "localhost"),
///         Patch::new("tags", vec![Value::from("web")]),
///     ]
/// );
/// ```
pub fn compute_patch(
    defaults: &dyn Model,
    persisted: &Mapping,
    hooks: &HookTable,
) -> Result<Vec<Patch>, ModelError> {
    let info = defaults.model_info();
    check_acyclic(info)?;

    let mut merge = Merge {
        hooks,
        patches: Vec::new(),
    };
    merge.model(defaults, Some(persisted), None, info.is_singleton())?;
    Ok(merge.patches)
}

struct Merge<'h> {
    hooks: &'h HookTable,
    patches: Vec<Patch>,
}

impl Merge<'_> {
    /// Merges the fields of `model`; `persisted` is `None` when the whole
    /// model is absent.
    fn model(
        &mut self,
        model: &dyn Model,
        persisted: Option<&Mapping>,
        base: Option<&PathEntry<'_>>,
        within_singleton: bool,
    ) -> Result<(), ModelError> {
        let info = model.model_info();

        for (index, field) in info.fields().iter().enumerate() {
            let Some(value) = model.field(index) else {
                continue;
            };
            let path = PathEntry::new(field.name(), base);
            let stored = persisted.and_then(|map| map.get(field.name()));

            if let Some(hook) = self.hooks.get(info.type_id(), field.name())
                && let Some(encoded) = hook.save(value)
            {
                if stored.is_none() {
                    self.patches.push(path.leaf(encoded));
                }
                continue;
            }

            self.field(value, stored, &path, within_singleton)?;
        }

        Ok(())
    }

    fn field(
        &mut self,
        value: &dyn Configurable,
        stored: Option<&Value>,
        path: &PathEntry<'_>,
        within_singleton: bool,
    ) -> Result<(), ModelError> {
        match value.config_ref() {
            ConfigRef::Primitive(_) | ConfigRef::Enum(_) => {
                if stored.is_none() {
                    let encoded = encode_value(value, path, self.hooks)?;
                    self.patches.push(path.leaf(encoded));
                }
            }
            ConfigRef::List(_) | ConfigRef::Map(_) => {
                if stored.is_none() {
                    self.container(value, path)?;
                }
            }
            ConfigRef::Object(nested) => {
                let nested_info = nested.model_info();
                if nested_info.is_singleton()
                    && !within_singleton
                    && self.is_pristine(nested, path)?
                {
                    log::trace!("`{path}` holds a pristine singleton, skipped");
                    return Ok(());
                }
                match stored {
                    Some(Value::Map(map)) => self.model(nested, Some(map), Some(path), within_singleton)?,
                    None => self.model(nested, None, Some(path), within_singleton)?,
                    Some(other) => {
                        log::debug!("`{path}` is stored as {}, not merged", other.kind());
                    }
                }
            }
            ConfigRef::Opaque(opaque) => {
                if stored.is_none() {
                    return Err(ModelError::UnsupportedShape {
                        path: path.to_string(),
                        type_name: opaque.config_type_name(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Writes an absent list or map in full, leaving out empty containers at
    /// any depth.
    fn container(&mut self, value: &dyn Configurable, path: &PathEntry<'_>) -> Result<(), ModelError> {
        match encode_value(value, path, self.hooks)? {
            Value::List(items) if !items.is_empty() => {
                self.patches.push(path.leaf(items));
            }
            Value::Map(entries) => {
                for Patch { path: relative, value } in entries.flatten() {
                    if is_empty_container(&value) {
                        continue;
                    }
                    self.patches.push(Patch::new(alloc::format!("{path}.{relative}"), value));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Returns `true` if `nested` encodes exactly like a fresh default
    /// instance of its type.
    fn is_pristine(&self, nested: &dyn Model, path: &PathEntry<'_>) -> Result<bool, ModelError> {
        let current = encode_model(nested, Some(path), self.hooks)?;
        let default = nested.default_instance();
        let pristine = encode_model(default.as_ref(), Some(path), self.hooks)?;
        Ok(current == pristine)
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        _ => false,
    }
}

//! Per-field save/load transforms.
//!
//! A [`FieldHook`] replaces the engine's own handling of one field. Hooks
//! live outside the model types in a [`HookTable`], which is passed to every
//! engine call.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use vc_model::{FieldHook, HookTable, Model};
//! use vc_tree::Value;
//!
//! #[derive(Model, Default, Debug, PartialEq)]
//! struct Timeouts {
//!     connect: Duration,
//! }
//!
//! let mut hooks = HookTable::new();
//! hooks
//!     .register::<Timeouts>(
//!         "connect",
//!         FieldHook::new()
//!             .on_save(|d: &Duration| Value::Int(d.as_millis() as i64))
//!             .on_load(|v: &Value| Some(Duration::from_millis(v.as_int()? as u64))),
//!     )
//!     .unwrap();
//!
//! let timeouts = Timeouts { connect: Duration::from_millis(250) };
//! let tree = vc_model::to_map(&timeouts, &hooks).unwrap();
//! assert_eq!(tree.get("connect"), Some(&Value::Int(250)));
//!
//! let back: Timeouts = vc_model::from_map(&tree, &hooks).unwrap();
//! assert_eq!(back, timeouts);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::HashMap;
use vc_tree::Value;

use crate::{Configurable, Model, ModelError};

// -----------------------------------------------------------------------------
// HookOutcome

/// The result of running a load hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// The field was replaced.
    Loaded,
    /// The hook refused the stored value; the field is unchanged.
    Rejected,
    /// The field is not of the hook's type; the field is unchanged.
    Mismatched,
}

// -----------------------------------------------------------------------------
// FieldHook

type SaveFn = dyn Fn(&dyn Any) -> Option<Value> + Send + Sync;
type LoadFn = dyn Fn(&Value, &mut dyn Any) -> HookOutcome + Send + Sync;

#[derive(Clone, Copy)]
struct HookTarget {
    type_id: TypeId,
    type_name: &'static str,
}

impl HookTarget {
    fn of<T: Configurable>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }
}

/// A custom save and/or load transform for one field.
///
/// The save function replaces the field's encoding; the load function
/// receives the stored value and returns the new field value, or `None` to
/// leave the field unchanged. Numbers are widened or narrowed to the field's
/// primitive kind before the load function sees them.
#[derive(Default)]
pub struct FieldHook {
    target: Option<HookTarget>,
    // Set when `on_save` and `on_load` were given different field types.
    conflict: Option<&'static str>,
    save: Option<Box<SaveFn>>,
    load: Option<Box<LoadFn>>,
}

impl FieldHook {
    /// Creates a hook with neither transform.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn retarget<T: Configurable>(&mut self) {
        let target = HookTarget::of::<T>();
        match self.target {
            Some(current) if current.type_id != target.type_id => {
                self.conflict = Some(target.type_name);
            }
            _ => self.target = Some(target),
        }
    }

    /// Sets the save transform for a field of type `T`.
    pub fn on_save<T, F>(mut self, save: F) -> Self
    where
        T: Configurable,
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.retarget::<T>();
        self.save = Some(Box::new(move |field: &dyn Any| {
            field.downcast_ref::<T>().map(&save)
        }));
        self
    }

    /// Sets the load transform for a field of type `T`.
    pub fn on_load<T, F>(mut self, load: F) -> Self
    where
        T: Configurable,
        F: Fn(&Value) -> Option<T> + Send + Sync + 'static,
    {
        self.retarget::<T>();
        self.load = Some(Box::new(move |stored: &Value, field: &mut dyn Any| {
            let Some(slot) = field.downcast_mut::<T>() else {
                return HookOutcome::Mismatched;
            };
            match load(stored) {
                Some(value) => {
                    *slot = value;
                    HookOutcome::Loaded
                }
                None => HookOutcome::Rejected,
            }
        }));
        self
    }

    #[inline]
    pub fn has_save(&self) -> bool {
        self.save.is_some()
    }

    #[inline]
    pub fn has_load(&self) -> bool {
        self.load.is_some()
    }

    /// Runs the save transform.
    ///
    /// Returns `None` if there is none or `field` is not of the hook's type.
    pub fn save(&self, field: &dyn Configurable) -> Option<Value> {
        let save = self.save.as_ref()?;
        let field: &dyn Any = field;
        save(field)
    }

    /// Runs the load transform, if any.
    pub fn load(&self, stored: &Value, field: &mut dyn Configurable) -> Option<HookOutcome> {
        let load = self.load.as_ref()?;
        let field: &mut dyn Any = field;
        Some(load(stored, field))
    }
}

impl fmt::Debug for FieldHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHook")
            .field("target", &self.target.map(|t| t.type_name))
            .field("save", &self.save.is_some())
            .field("load", &self.load.is_some())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// HookTable

/// Registered [`FieldHook`]s, keyed by model type and field name.
///
/// A table is read-only during engine calls and may be shared between
/// threads.
#[derive(Default)]
pub struct HookTable {
    hooks: HashMap<TypeId, HashMap<&'static str, FieldHook, FixedState>, FixedState>,
}

impl HookTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.values().map(HashMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Registers `hook` for the field stored under `field` in model `M`,
    /// replacing any hook registered before.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UnknownField`] if `M` has no such field.
    /// - [`ModelError::HookTypeMismatch`] if the hook was built for another
    ///   type than the field's.
    pub fn register<M: Model>(
        &mut self,
        field: &str,
        hook: FieldHook,
    ) -> Result<&mut Self, ModelError> {
        let info = M::info();
        let Some(field_info) = info.field(field) else {
            return Err(ModelError::UnknownField {
                model: info.type_name(),
                field: String::from(field),
            });
        };

        if let Some(type_name) = hook.conflict {
            return Err(ModelError::HookTypeMismatch {
                path: String::from(field_info.name()),
                type_name,
            });
        }
        if let Some(target) = hook.target
            && target.type_id != field_info.type_id()
        {
            return Err(ModelError::HookTypeMismatch {
                path: String::from(field_info.name()),
                type_name: target.type_name,
            });
        }

        log::trace!("registered hook for `{}.{}`", info.type_name(), field_info.name());
        self.hooks
            .entry(info.type_id())
            .or_default()
            .insert(field_info.name(), hook);
        Ok(self)
    }

    /// Removes the hook of a field, returning it.
    pub fn unregister<M: Model>(&mut self, field: &str) -> Option<FieldHook> {
        let fields = self.hooks.get_mut(&M::info().type_id())?;
        let hook = fields.remove(field);
        if fields.is_empty() {
            self.hooks.remove(&M::info().type_id());
        }
        hook
    }

    /// Returns the hook of field `field` of the model type `model`.
    #[inline]
    pub fn get(&self, model: TypeId, field: &str) -> Option<&FieldHook> {
        self.hooks.get(&model)?.get(field)
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.hooks.values().flat_map(|fields| fields.iter()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use vc_tree::Value;

    use super::{FieldHook, HookTable};
    use crate::ModelError;
    use crate::fixtures::{Palette, Point};

    #[test]
    fn unknown_field_is_rejected() {
        let mut hooks = HookTable::new();
        let err = hooks
            .register::<Point>("z", FieldHook::new().on_save(|v: &i32| Value::Int(i64::from(*v))))
            .unwrap_err();

        assert!(matches!(err, ModelError::UnknownField { field, .. } if field == "z"));
        assert!(hooks.is_empty());
    }

    #[test]
    fn field_type_must_match() {
        let mut hooks = HookTable::new();
        let err = hooks
            .register::<Point>("x", FieldHook::new().on_save(|v: &String| Value::from(v.as_str())))
            .unwrap_err();

        assert!(matches!(err, ModelError::HookTypeMismatch { .. }));
        assert_eq!(err.path(), "x");
    }

    #[test]
    fn save_and_load_types_must_agree() {
        let hook = FieldHook::new()
            .on_save(|v: &i32| Value::Int(i64::from(*v)))
            .on_load(|v: &Value| v.as_int());

        let mut hooks = HookTable::new();
        let err = hooks.register::<Point>("x", hook).unwrap_err();
        assert!(matches!(err, ModelError::HookTypeMismatch { type_name, .. } if type_name == "i64"));
    }

    #[test]
    fn register_and_unregister() {
        let mut hooks = HookTable::new();
        hooks
            .register::<Point>("x", FieldHook::new().on_load(|_: &Value| Some(0_i32)))
            .unwrap()
            .register::<Palette>("name", FieldHook::new().on_load(|_: &Value| None::<String>))
            .unwrap();
        assert_eq!(hooks.len(), 2);

        assert!(hooks.unregister::<Point>("x").is_some_and(|h| h.has_load()));
        assert!(hooks.unregister::<Point>("x").is_none());
        assert_eq!(hooks.len(), 1);
    }
}

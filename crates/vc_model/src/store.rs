use vc_tree::ConfigBackend;

use crate::{HookTable, Model, ModelError, compute_patch, from_map, load_into, to_map};

// -----------------------------------------------------------------------------
// Backend operations

/// Writes every leaf of a model into `backend`.
///
/// Returns the number of writes.
///
/// # Errors
///
/// Same as [`to_map`]; nothing is written on error.
pub fn save_to<B: ConfigBackend>(
    backend: &mut B,
    model: &dyn Model,
    hooks: &HookTable,
) -> Result<usize, ModelError> {
    let tree = to_map(model, hooks)?;
    let written = backend.apply(tree.flatten());
    log::debug!("saved `{}`: {written} writes", model.model_info().type_name());
    Ok(written)
}

/// Builds a model instance from the contents of `backend`.
///
/// # Errors
///
/// Same as [`from_map`].
pub fn load_from<T, B>(backend: &B, hooks: &HookTable) -> Result<T, ModelError>
where
    T: Model + Default,
    B: ConfigBackend + ?Sized,
{
    from_map(&backend.to_map(), hooks)
}

/// Loads `model` from `backend` and backfills the backend with the
/// model's current values wherever it has no value yet.
///
/// The model's values on entry act as the defaults. The backend receives
/// the writes of [`compute_patch`], and the model is then loaded from the
/// merged tree, so both end up holding the same configuration. Returns the
/// number of writes.
///
/// # Errors
///
/// Same as [`compute_patch`] and [`load_into`]; nothing is written on error.
///
/// # Examples
///
/// ```
/// use vc_model::{HookTable, Model};
/// use vc_tree::{ConfigBackend, MemoryBackend, Value};
///
/// #[derive(Model, Debug, PartialEq)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl Default for Server {
///     fn default() -> Self {
///         Server { host: "localhost".into(), port: 8080 }
///     }
/// }
///
/// let mut backend = MemoryBackend::new();
/// backend.set("port", Value::Int(9000));
///
/// let mut server = Server::default();
/// let written = vc_model::load_and_set_default(&mut backend, &mut server, &HookTable::new()).unwrap();
///
/// assert_eq!(written, 1);
/// assert_eq!(server, Server { host: "localhost".into(), port: 9000 });
/// assert_eq!(backend.get("host"), Some(Value::from("localhost")));
/// ```
pub fn load_and_set_default<B: ConfigBackend>(
    backend: &mut B,
    model: &mut dyn Model,
    hooks: &HookTable,
) -> Result<usize, ModelError> {
    let mut merged = backend.to_map();
    let patches = compute_patch(&*model, &merged, hooks)?;
    for patch in &patches {
        merged.set_path(&patch.path, patch.value.clone());
    }
    load_into(model, &merged, hooks)?;

    let written = backend.apply(patches);
    log::debug!(
        "loaded `{}` and backfilled {written} defaults",
        model.model_info().type_name()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use vc_tree::{ConfigBackend, Mapping, MemoryBackend, Value};

    use super::{load_and_set_default, load_from, save_to};
    use crate::fixtures::{Canvas, Color, Point, Stamp, album, canvas};
    use crate::{HookTable, ModelError, to_map};

    #[test]
    fn save_then_load() {
        let hooks = HookTable::new();
        let mut backend = MemoryBackend::new();

        let written = save_to(&mut backend, &canvas(), &hooks).unwrap();
        assert_eq!(written, to_map(&canvas(), &hooks).unwrap().flatten().len());
        assert_eq!(backend.get("points.1.y"), Some(Value::Int(4)));
        assert_eq!(backend.get("palette.primary"), Some(Value::from("GREEN")));

        let loaded: Canvas = load_from(&backend, &hooks).unwrap();
        assert_eq!(loaded, canvas());
    }

    #[test]
    fn dotted_map_keys_are_not_saved() {
        let hooks = HookTable::new();
        let mut backend = MemoryBackend::new();
        let model = Canvas {
            anchors: BTreeMap::from([(String::from("a.b"), Point { x: 1, y: 2 })]),
            ..Canvas::default()
        };

        save_to(&mut backend, &model, &hooks).unwrap();
        assert_eq!(backend.get("anchors.a"), None);

        let loaded: Canvas = load_from(&backend, &hooks).unwrap();
        assert!(loaded.anchors.is_empty());
    }

    #[test]
    fn failed_save_writes_nothing() {
        let mut backend = MemoryBackend::new();
        let err = save_to(&mut backend, &Stamp::default(), &HookTable::new()).unwrap_err();

        assert!(matches!(err, ModelError::UnsupportedShape { .. }));
        assert_eq!(backend.as_mapping(), &Mapping::new());
    }

    #[test]
    fn defaults_fill_only_the_gaps() {
        let hooks = HookTable::new();
        let mut backend = MemoryBackend::new();
        backend.set("title", Value::from("stored"));
        backend.set("palette.primary", Value::from("BLUE"));
        backend.set("points.0.x", Value::Int(9));

        let mut model = canvas();
        let written = load_and_set_default(&mut backend, &mut model, &hooks).unwrap();

        // Stored values win in the model.
        assert_eq!(model.title, "stored");
        assert_eq!(model.palette.primary, Color::Blue);
        assert_eq!(model.points, [Point { x: 9, y: 0 }]);
        assert_eq!(model.palette.name, "warm");
        assert_eq!(model.palette.colors, [Color::Red, Color::Green]);

        // And are left alone in the backend.
        assert_eq!(backend.get("title"), Some(Value::from("stored")));
        assert_eq!(backend.get("points.1.x"), None);
        assert_eq!(backend.get("scale"), Some(Value::Float(1.5)));
        assert_eq!(
            backend.get("palette.colors"),
            Some(Value::List(vec![Value::from("RED"), Value::from("GREEN")]))
        );
        assert!(written > 0);

        // A second pass has nothing left to write.
        let mut again = canvas();
        assert_eq!(load_and_set_default(&mut backend, &mut again, &hooks).unwrap(), 0);
        assert_eq!(again, model);
    }

    #[test]
    fn failed_backfill_changes_neither_side() {
        let mut backend = MemoryBackend::new();
        backend.set("frame.stamp.taken", Value::Int(5));
        let before = backend.as_mapping().clone();

        let mut model = album();
        let err = load_and_set_default(&mut backend, &mut model, &HookTable::new()).unwrap_err();

        assert!(matches!(err, ModelError::UnsupportedShape { .. }));
        assert_eq!(model, album());
        assert_eq!(backend.as_mapping(), &before);
    }

    #[test]
    fn fresh_backend_receives_every_default() {
        let hooks = HookTable::new();
        let mut backend = MemoryBackend::new();
        let mut model = Canvas {
            title: String::from("fresh"),
            ..Canvas::default()
        };

        load_and_set_default(&mut backend, &mut model, &hooks).unwrap();

        let loaded: Canvas = load_from(&backend, &hooks).unwrap();
        assert_eq!(loaded, model);
    }
}

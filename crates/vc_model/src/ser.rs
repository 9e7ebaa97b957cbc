use alloc::string::ToString;
use alloc::vec::Vec;

use vc_tree::{Mapping, PathEntry, Value};

use crate::ops::ConfigRef;
use crate::{Configurable, HookTable, Model, ModelError, check_acyclic};

// -----------------------------------------------------------------------------
// to_map

/// Encodes a model instance as a configuration tree.
///
/// Every field is written, in declaration order:
///
/// - a field with a save hook stores the hook's output verbatim;
/// - primitives are stored as scalars and enums by member name;
/// - lists of primitives or enums become literal lists;
/// - any other list becomes a mapping keyed by the zero-based index;
/// - maps keep their keys, nested models become nested mappings. Entries
///   whose key contains `.` are skipped with a warning.
///
/// # Errors
///
/// - [`ModelError::CyclicModel`] if the model type contains itself.
/// - [`ModelError::UnsupportedShape`] for an opaque field with no save hook.
///
/// # Examples
///
/// ```
/// use vc_model::{HookTable, Model};
/// use vc_tree::Mapping;
///
/// #[derive(Model, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Model, Default)]
/// struct Shape {
///     points: Vec<Point>,
/// }
///
/// let shape = Shape {
///     points: vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }],
/// };
/// let tree = vc_model::to_map(&shape, &HookTable::new()).unwrap();
///
/// let expected: Mapping = serde_json::from_str(
///     r#"{ "points": { "0": { "x": 1, "y": 2 }, "1": { "x": 3, "y": 4 } } }"#,
/// )
/// .unwrap();
/// assert_eq!(tree, expected);
/// ```
pub fn to_map(model: &dyn Model, hooks: &HookTable) -> Result<Mapping, ModelError> {
    check_acyclic(model.model_info())?;
    encode_model(model, None, hooks)
}

pub(crate) fn encode_model(
    model: &dyn Model,
    base: Option<&PathEntry<'_>>,
    hooks: &HookTable,
) -> Result<Mapping, ModelError> {
    let info = model.model_info();
    let mut out = Mapping::with_capacity(info.field_len());

    for (index, field) in info.fields().iter().enumerate() {
        let Some(value) = model.field(index) else {
            continue;
        };
        let path = PathEntry::new(field.name(), base);
        let encoded = match hooks.get(info.type_id(), field.name()) {
            Some(hook) if hook.has_save() => match hook.save(value) {
                Some(encoded) => encoded,
                None => encode_value(value, &path, hooks)?,
            },
            _ => encode_value(value, &path, hooks)?,
        };
        out.insert(field.name(), encoded);
    }

    Ok(out)
}

/// Encodes a single value found at `path`.
pub(crate) fn encode_value(
    value: &dyn Configurable,
    path: &PathEntry<'_>,
    hooks: &HookTable,
) -> Result<Value, ModelError> {
    Ok(match value.config_ref() {
        ConfigRef::Primitive(primitive) => primitive.to_value(),
        ConfigRef::Enum(member) => Value::from(member.name()),
        ConfigRef::List(list) if list.item_descriptor().is_scalar() => {
            let mut items = Vec::with_capacity(list.len());
            for index in 0..list.len() {
                if let Some(item) = list.item(index) {
                    items.push(encode_value(item, &path.child(index), hooks)?);
                }
            }
            Value::List(items)
        }
        ConfigRef::List(list) => {
            let mut items = Mapping::with_capacity(list.len());
            for index in 0..list.len() {
                if let Some(item) = list.item(index) {
                    let encoded = encode_value(item, &path.child(index), hooks)?;
                    items.insert(index.to_string(), encoded);
                }
            }
            Value::Map(items)
        }
        ConfigRef::Map(map) => {
            let mut entries = Mapping::with_capacity(map.len());
            for (key, item) in map.entries() {
                // Flattened paths are joined with `.`, so such a key cannot be stored.
                if key.contains('.') {
                    log::warn!("skipped `{path}` entry {key:?}: map keys cannot contain `.`");
                    continue;
                }
                entries.insert(key, encode_value(item, &path.child(key), hooks)?);
            }
            Value::Map(entries)
        }
        ConfigRef::Object(nested) => Value::Map(encode_model(nested, Some(path), hooks)?),
        ConfigRef::Opaque(opaque) => {
            return Err(ModelError::UnsupportedShape {
                path: path.to_string(),
                type_name: opaque.config_type_name(),
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use vc_tree::{Mapping, Value};

    use super::to_map;
    use crate::fixtures::{Canvas, Color, Palette, Point, Registry, Stamp, canvas};
    use crate::{FieldHook, HookTable, ModelError};

    #[test]
    fn nested_shapes_are_encoded() {
        let tree = to_map(&canvas(), &HookTable::new()).unwrap();

        let expected: Mapping = serde_json::from_str(
            r#"{
                "title": "demo",
                "scale": 1.5,
                "points": { "0": { "x": 1, "y": 2 }, "1": { "x": 3, "y": 4 } },
                "anchors": { "origin": { "x": 0, "y": 0 } },
                "palette": { "name": "warm", "colors": ["RED", "GREEN"], "primary": "GREEN" },
                "layers": { "0": [1, 2], "1": [] },
                "tags": []
            }"#,
        )
        .unwrap();
        assert_eq!(tree, expected);
    }

    #[test]
    fn fields_follow_declaration_order() {
        let tree = to_map(&Canvas::default(), &HookTable::new()).unwrap();
        let keys: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["title", "scale", "points", "anchors", "palette", "layers", "tags"]
        );
    }

    #[test]
    fn save_hook_output_is_verbatim() {
        let mut hooks = HookTable::new();
        hooks
            .register::<Palette>(
                "primary",
                FieldHook::new().on_save(|c: &Color| Value::Int(*c as i64)),
            )
            .unwrap();

        let tree = to_map(&Palette::default(), &hooks).unwrap();
        assert_eq!(tree.get("primary"), Some(&Value::Int(0)));
        assert_eq!(tree.get("name"), Some(&Value::from("")));
    }

    #[test]
    fn opaque_field_without_hook_fails() {
        let err = to_map(&Stamp::default(), &HookTable::new()).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedShape { .. }));
        assert_eq!(err.path(), "taken");
    }

    #[test]
    fn dotted_map_keys_are_not_stored() {
        let model = Canvas {
            anchors: BTreeMap::from([
                (String::from("a.b"), Point { x: 1, y: 2 }),
                (String::from("c"), Point { x: 3, y: 4 }),
            ]),
            ..Canvas::default()
        };
        let tree = to_map(&model, &HookTable::new()).unwrap();

        let anchors = tree.get("anchors").and_then(Value::as_map).unwrap();
        let keys: Vec<&str> = anchors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["c"]);
    }

    #[test]
    fn empty_object_list_is_an_empty_mapping() {
        let tree = to_map(&Registry::default(), &HookTable::new()).unwrap();
        assert_eq!(tree.get("enabled"), Some(&Value::Bool(true)));
        assert_eq!(tree.get("plugins"), Some(&Value::Map(Mapping::new())));
    }
}

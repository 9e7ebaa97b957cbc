use alloc::borrow::Cow;
use alloc::string::ToString;

use vc_tree::{Mapping, PathEntry, Value};

use crate::hook::HookOutcome;
use crate::info::{ModelInfo, PrimitiveKind, TypeDescriptor};
use crate::ops::{ConfigMut, ListOps, MapOps};
use crate::{Configurable, FieldHook, HookTable, Model, ModelError, check_acyclic};

// -----------------------------------------------------------------------------
// from_map / load_into

/// Builds a model instance from a configuration tree.
///
/// The instance starts from `T::default()`; see [`load_into`] for how stored
/// values are applied.
///
/// # Examples
///
/// ```
/// use vc_model::{HookTable, Model};
/// use vc_tree::Mapping;
///
/// #[derive(Model, Default, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Model, Default, Debug, PartialEq)]
/// struct Shape {
///     points: Vec<Point>,
/// }
///
/// // Elements are rebuilt in the stored order, not by numeric key.
/// let tree: Mapping = serde_json::from_str(
///     r#"{ "points": { "1": { "x": 3, "y": 4 }, "0": { "x": 1, "y": 2 } } }"#,
/// )
/// .unwrap();
///
/// let shape: Shape = vc_model::from_map(&tree, &HookTable::new()).unwrap();
/// assert_eq!(shape.points, [Point { x: 3, y: 4 }, Point { x: 1, y: 2 }]);
/// ```
pub fn from_map<T: Model + Default>(map: &Mapping, hooks: &HookTable) -> Result<T, ModelError> {
    let mut model = T::default();
    load_into(&mut model, map, hooks)?;
    Ok(model)
}

/// Applies a configuration tree to an existing model instance.
///
/// Fields whose key is absent keep their current value; unknown keys are
/// ignored. A present value replaces the field only if it fits the field's
/// shape:
///
/// - primitives require a matching kind, with integral floats accepted as
///   integers and integers accepted as floats;
/// - enums require the exact name of a member;
/// - a literal list replaces a list of primitives or enums only if every
///   element fits; for other lists, elements that do not fit are dropped;
/// - a mapping stored for a list is read in the mapping's own order,
///   dropping values that do not fit;
/// - map entries that do not fit are dropped;
/// - nested models need a mapping. Singleton models are updated in place;
///   other models are reset to their default first.
///
/// Values that do not fit are logged at `debug` level and skipped.
///
/// # Errors
///
/// - [`ModelError::CyclicModel`] if the model type contains itself.
/// - [`ModelError::UnsupportedShape`] for a stored opaque field with no load
///   hook.
///
/// Both are detected before any field is written, so `model` is unchanged
/// when an error is returned.
pub fn load_into(model: &mut dyn Model, map: &Mapping, hooks: &HookTable) -> Result<(), ModelError> {
    let info = model.model_info();
    check_acyclic(info)?;
    check_model(info, map, None, hooks)?;
    decode_model(model, map, None, hooks)
}

// -----------------------------------------------------------------------------
// Opaque check

/// Walks the stored values the way decoding would and fails on the first
/// one that reaches an opaque field without a load hook.
fn check_model(
    info: &'static ModelInfo,
    map: &Mapping,
    base: Option<&PathEntry<'_>>,
    hooks: &HookTable,
) -> Result<(), ModelError> {
    for field in info.fields() {
        let Some(stored) = map.get(field.name()) else {
            continue;
        };
        if hooks.get(info.type_id(), field.name()).is_some_and(FieldHook::has_load) {
            continue;
        }
        let path = PathEntry::new(field.name(), base);
        check_value(field.descriptor(), stored, &path, hooks)?;
    }
    Ok(())
}

fn check_value(
    descriptor: TypeDescriptor,
    stored: &Value,
    path: &PathEntry<'_>,
    hooks: &HookTable,
) -> Result<(), ModelError> {
    match (descriptor, stored) {
        (TypeDescriptor::List(item), Value::List(items)) => {
            let item = item();
            for (index, value) in items.iter().enumerate() {
                check_value(item, value, &path.child(index), hooks)?;
            }
        }
        (TypeDescriptor::List(item) | TypeDescriptor::Map(item), Value::Map(entries)) => {
            let item = item();
            for (key, value) in entries {
                check_value(item, value, &path.child(key), hooks)?;
            }
        }
        (TypeDescriptor::Object(info), Value::Map(map)) => check_model(info(), map, Some(path), hooks)?,
        (TypeDescriptor::Opaque(type_name), _) => {
            return Err(ModelError::UnsupportedShape {
                path: path.to_string(),
                type_name: type_name(),
            });
        }
        _ => {}
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Decoding

fn decode_model(
    model: &mut dyn Model,
    map: &Mapping,
    base: Option<&PathEntry<'_>>,
    hooks: &HookTable,
) -> Result<(), ModelError> {
    let info = model.model_info();

    for (index, field) in info.fields().iter().enumerate() {
        let Some(stored) = map.get(field.name()) else {
            continue;
        };
        let Some(target) = model.field_mut(index) else {
            continue;
        };
        let path = PathEntry::new(field.name(), base);

        if let Some(hook) = hooks.get(info.type_id(), field.name())
            && hook.has_load()
        {
            let stored = coerce_number(stored, field.descriptor());
            match hook.load(&stored, target) {
                Some(HookOutcome::Loaded) | None => {}
                Some(HookOutcome::Rejected) => {
                    log::debug!("load hook rejected {} for `{path}`", stored.kind());
                }
                Some(HookOutcome::Mismatched) => {
                    log::debug!("load hook for `{path}` expects another field type");
                }
            }
            continue;
        }

        if !decode_value(target, stored, &path, hooks)? {
            log::debug!(
                "skipped `{path}`: stored {} does not fit `{}`",
                stored.kind(),
                field.type_name(),
            );
        }
    }

    Ok(())
}

/// Applies `stored` to `target`, returning whether it fit.
fn decode_value(
    target: &mut dyn Configurable,
    stored: &Value,
    path: &PathEntry<'_>,
    hooks: &HookTable,
) -> Result<bool, ModelError> {
    match target.config_mut() {
        ConfigMut::Primitive(primitive) => Ok(primitive.set_value(stored)),
        ConfigMut::Enum(member) => Ok(stored.as_str().is_some_and(|name| member.select(name))),
        ConfigMut::List(list) => decode_list(list, stored, path, hooks),
        ConfigMut::Map(map) => decode_map(map, stored, path, hooks),
        ConfigMut::Object(nested) => {
            let Value::Map(map) = stored else {
                return Ok(false);
            };
            if !nested.model_info().is_singleton() {
                nested.reset();
            }
            decode_model(nested, map, Some(path), hooks)?;
            Ok(true)
        }
        ConfigMut::Opaque(opaque) => Err(ModelError::UnsupportedShape {
            path: path.to_string(),
            type_name: opaque.config_type_name(),
        }),
    }
}

fn decode_list(
    list: &mut dyn ListOps,
    stored: &Value,
    path: &PathEntry<'_>,
    hooks: &HookTable,
) -> Result<bool, ModelError> {
    let mut staged = list.empty();

    match stored {
        Value::List(items) => {
            // A literal list of scalars is taken whole or not at all.
            let strict = list.item_descriptor().is_scalar();
            for (index, item) in items.iter().enumerate() {
                let element = path.child(index);
                if !decode_value(staged.push_default(), item, &element, hooks)? {
                    if strict {
                        return Ok(false);
                    }
                    log::debug!("dropped `{element}`: stored {} does not fit", item.kind());
                    staged.discard_last();
                }
            }
        }
        Value::Map(items) => {
            for (key, item) in items {
                let element = path.child(key);
                if !decode_value(staged.push_default(), item, &element, hooks)? {
                    log::debug!("dropped `{element}`: stored {} does not fit", item.kind());
                    staged.discard_last();
                }
            }
        }
        _ => return Ok(false),
    }

    list.assign(staged);
    Ok(true)
}

fn decode_map(
    map: &mut dyn MapOps,
    stored: &Value,
    path: &PathEntry<'_>,
    hooks: &HookTable,
) -> Result<bool, ModelError> {
    let Value::Map(entries) = stored else {
        return Ok(false);
    };

    let mut staged = map.empty();
    for (key, item) in entries {
        let entry = path.child(key);
        if !decode_value(staged.insert_default(key), item, &entry, hooks)? {
            log::debug!("dropped `{entry}`: stored {} does not fit", item.kind());
            staged.discard(key);
        }
    }

    map.assign(staged);
    Ok(true)
}

/// Converts a stored number to the field's numeric kind where that is
/// lossless, so hooks see integers for integer fields and floats for float
/// fields.
fn coerce_number(stored: &Value, descriptor: TypeDescriptor) -> Cow<'_, Value> {
    match (descriptor.primitive_kind(), stored) {
        (Some(PrimitiveKind::Int), Value::Float(_)) => match stored.as_int() {
            Some(int) => Cow::Owned(Value::Int(int)),
            None => Cow::Borrowed(stored),
        },
        (Some(PrimitiveKind::Float), Value::Int(int)) => Cow::Owned(Value::Float(*int as f64)),
        _ => Cow::Borrowed(stored),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use core::time::Duration;

    use vc_tree::{Mapping, Value};

    use super::{from_map, load_into};
    use crate::fixtures::{
        Album, Canvas, Color, Counter, Palette, Plugin, Point, Registry, Stamp, album, canvas,
    };
    use crate::{FieldHook, HookTable, ModelError, to_map};

    fn parse(text: &str) -> Mapping {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn round_trip() {
        let hooks = HookTable::new();
        let original = canvas();

        let tree = to_map(&original, &hooks).unwrap();
        let back: Canvas = from_map(&tree, &hooks).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn empty_tree_gives_defaults() {
        let back: Canvas = from_map(&Mapping::new(), &HookTable::new()).unwrap();
        assert_eq!(back, Canvas::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let tree = parse(r#"{ "x": 5, "z": 9, "w": { "deep": true } }"#);
        let point: Point = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(point, Point { x: 5, y: 0 });
    }

    #[test]
    fn integral_floats_load_into_integers() {
        let tree = parse(r#"{ "x": 3.0, "y": 3.5 }"#);
        let point: Point = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(point, Point { x: 3, y: 0 });

        let tree = parse(r#"{ "scale": 2 }"#);
        let canvas: Canvas = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(canvas.scale, 2.0);
    }

    #[test]
    fn unsigned_values_above_i64_round_trip() {
        let hooks = HookTable::new();
        for hits in [1_u64 << 63, u64::MAX] {
            let original = Counter { hits, ratio: 0.25 };
            let tree = to_map(&original, &hooks).unwrap();
            let back: Counter = from_map(&tree, &hooks).unwrap();
            assert_eq!(back, original);
        }
    }

    #[test]
    fn out_of_range_f32_is_skipped() {
        let tree = parse(r#"{ "hits": 2, "ratio": 1e300 }"#);
        let counter: Counter = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(counter, Counter { hits: 2, ratio: 0.0 });
    }

    #[test]
    fn failed_load_leaves_the_model_untouched() {
        let hooks = HookTable::new();
        let mut model = album();

        let tree = parse(r#"{ "label": "winter", "frame": { "stamp": { "taken": 5 } } }"#);
        let err = load_into(&mut model, &tree, &hooks).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedShape { .. }));
        assert_eq!(err.path(), "frame.stamp.taken");
        assert_eq!(model, album());

        // A stored value that is not a mapping never reaches the opaque field.
        let tree = parse(r#"{ "label": "winter", "frame": { "stamp": 5 } }"#);
        load_into(&mut model, &tree, &hooks).unwrap();
        assert_eq!(model.label, "winter");
        assert_eq!(model.frame.name, "");
    }

    #[test]
    fn opaque_field_with_load_hook_is_accepted() {
        let mut hooks = HookTable::new();
        hooks
            .register::<Stamp>(
                "taken",
                FieldHook::new().on_load(|v: &Value| Some(Duration::from_secs(v.as_uint()?))),
            )
            .unwrap();

        let tree = parse(r#"{ "frame": { "name": "b", "stamp": { "taken": 5 } } }"#);
        let album: Album = from_map(&tree, &hooks).unwrap();
        assert_eq!(album.frame.name, "b");
        assert_eq!(album.frame.stamp.taken.as_secs(), 5);
    }

    #[test]
    fn unknown_member_keeps_default() {
        let tree = parse(r#"{ "primary": "PURPLE", "colors": ["BLUE"] }"#);
        let palette: Palette = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(palette.primary, Color::Red);
        assert_eq!(palette.colors, [Color::Blue]);
    }

    #[test]
    fn scalar_list_is_all_or_nothing() {
        let mut palette = Palette {
            colors: vec![Color::Green],
            ..Palette::default()
        };
        let tree = parse(r#"{ "colors": ["BLUE", "PURPLE"] }"#);
        load_into(&mut palette, &tree, &HookTable::new()).unwrap();
        assert_eq!(palette.colors, [Color::Green]);
    }

    #[test]
    fn object_list_drops_bad_elements() {
        let tree = parse(r#"{ "points": [{ "x": 1 }, 7, { "y": 2 }] }"#);
        let canvas: Canvas = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(
            canvas.points,
            [Point { x: 1, y: 0 }, Point { x: 0, y: 2 }]
        );

        let tree = parse(r#"{ "points": { "b": { "x": 9 }, "a": "nope", "c": {} } }"#);
        let canvas: Canvas = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(canvas.points, [Point { x: 9, y: 0 }, Point::default()]);
    }

    #[test]
    fn map_drops_bad_entries() {
        let tree = parse(r#"{ "anchors": { "a": { "x": 1 }, "b": [1, 2] } }"#);
        let canvas: Canvas = from_map(&tree, &HookTable::new()).unwrap();

        let expected = BTreeMap::from([(String::from("a"), Point { x: 1, y: 0 })]);
        assert_eq!(canvas.anchors, expected);
    }

    #[test]
    fn mismatched_shapes_are_skipped() {
        let tree = parse(r#"{ "title": 4, "points": "none", "palette": [1], "layers": 2 }"#);
        let mut canvas = canvas();
        let before = canvas.clone();

        load_into(&mut canvas, &tree, &HookTable::new()).unwrap();
        assert_eq!(canvas, before);
    }

    #[test]
    fn value_objects_are_rebuilt_and_singletons_updated() {
        let mut canvas = canvas();
        let tree = parse(r#"{ "palette": { "colors": [] } }"#);
        load_into(&mut canvas, &tree, &HookTable::new()).unwrap();
        assert_eq!(canvas.palette, Palette::default());

        let mut plugin = Plugin {
            registry: Registry {
                enabled: false,
                ..Registry::default()
            },
            ..Plugin::default()
        };
        let tree = parse(r#"{ "registry": { "plugins": {} } }"#);
        load_into(&mut plugin, &tree, &HookTable::new()).unwrap();
        assert!(!plugin.registry.enabled);
    }

    #[test]
    fn load_hook_sees_coerced_numbers() {
        let mut hooks = HookTable::new();
        hooks
            .register::<Point>(
                "x",
                FieldHook::new().on_load(|v: &Value| match v {
                    Value::Int(n) => i32::try_from(*n * 10).ok(),
                    _ => None,
                }),
            )
            .unwrap();

        let tree = parse(r#"{ "x": 4.0, "y": 1 }"#);
        let point: Point = from_map(&tree, &hooks).unwrap();
        assert_eq!(point, Point { x: 40, y: 1 });

        let tree = parse(r#"{ "x": "4" }"#);
        let point: Point = from_map(&tree, &hooks).unwrap();
        assert_eq!(point, Point::default());
    }

    #[test]
    fn ron_documents_load_too() {
        let tree: Mapping = ron::from_str(r#"{ "x": 2, "y": -3 }"#).unwrap();
        let point: Point = from_map(&tree, &HookTable::new()).unwrap();
        assert_eq!(point, Point { x: 2, y: -3 });
    }
}

use alloc::string::ToString;
use alloc::vec::Vec;
use core::any::TypeId;

use foldhash::fast::FixedState;
use hashbrown::HashSet;
use vc_tree::PathEntry;

use crate::ModelError;
use crate::info::{ModelInfo, TypeDescriptor};

// -----------------------------------------------------------------------------
// check_acyclic

/// Verifies that a model type does not contain itself.
///
/// The walk follows nested objects, list elements and map values (shown as
/// `*` in the error path). It does not descend into singleton types, whose
/// one instance is never rebuilt.
///
/// Every engine entry point runs this check before touching a value.
///
/// # Errors
///
/// [`ModelError::CyclicModel`] naming the first field path that leads back
/// to a type already being walked.
///
/// # Examples
///
/// ```
/// use vc_model::{Model, ModelError};
///
/// #[derive(Model, Default)]
/// struct Menu {
///     label: String,
///     children: Vec<Menu>,
/// }
///
/// let err = vc_model::check_acyclic(Menu::info()).unwrap_err();
/// assert!(matches!(err, ModelError::CyclicModel { .. }));
/// assert_eq!(err.path(), "children.*");
/// ```
pub fn check_acyclic(info: &'static ModelInfo) -> Result<(), ModelError> {
    let mut walk = TypeWalk {
        stack: Vec::new(),
        settled: HashSet::with_hasher(FixedState::default()),
    };
    walk.visit_model(info, None)
}

struct TypeWalk {
    // Types on the current walk, outermost first.
    stack: Vec<TypeId>,
    // Types whose whole subgraph is known to be acyclic.
    settled: HashSet<TypeId, FixedState>,
}

impl TypeWalk {
    fn visit_model(
        &mut self,
        info: &'static ModelInfo,
        base: Option<&PathEntry<'_>>,
    ) -> Result<(), ModelError> {
        if self.settled.contains(&info.type_id()) {
            return Ok(());
        }

        self.stack.push(info.type_id());
        for field in info.fields() {
            let path = PathEntry::new(field.name(), base);
            self.visit_descriptor(field.descriptor(), &path)?;
        }
        self.stack.pop();

        self.settled.insert(info.type_id());
        Ok(())
    }

    fn visit_descriptor(
        &mut self,
        descriptor: TypeDescriptor,
        path: &PathEntry<'_>,
    ) -> Result<(), ModelError> {
        match descriptor {
            TypeDescriptor::List(item) | TypeDescriptor::Map(item) => {
                self.visit_descriptor(item(), &path.child("*"))
            }
            TypeDescriptor::Object(info) => {
                let info = info();
                if info.is_singleton() {
                    return Ok(());
                }
                if self.stack.contains(&info.type_id()) {
                    return Err(ModelError::CyclicModel {
                        path: path.to_string(),
                        type_name: info.type_name(),
                    });
                }
                self.visit_model(info, Some(path))
            }
            TypeDescriptor::Primitive(_) | TypeDescriptor::Enum(_) | TypeDescriptor::Opaque(_) => {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::check_acyclic;
    use crate::fixtures::{Canvas, Node, Registry, Tree};
    use crate::{Model, ModelError};

    #[test]
    fn shared_types_are_not_cycles() {
        // `Canvas` reaches `Point` twice, through a list and a map.
        assert!(check_acyclic(Canvas::info()).is_ok());
    }

    #[test]
    fn indirect_cycle_is_reported() {
        let err = check_acyclic(Tree::info()).unwrap_err();
        assert_eq!(
            err,
            ModelError::CyclicModel {
                path: "root.children.*".into(),
                type_name: Node::info().type_name(),
            }
        );
    }

    #[test]
    fn singletons_break_the_walk() {
        assert!(check_acyclic(Registry::info()).is_ok());
    }
}

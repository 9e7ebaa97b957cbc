use alloc::boxed::Box;

use crate::Configurable;
use crate::info::{FieldInfo, ModelInfo};

// -----------------------------------------------------------------------------
// Model

/// A struct whose fields are stored as a nested configuration mapping.
///
/// It's strongly recommended to use [`derive::Model`] instead of implementing
/// this trait by hand. The derive builds a static [`ModelInfo`] listing the
/// fields in declaration order and implements indexed access to them.
///
/// # Examples
///
/// ```
/// use vc_model::Model;
///
/// #[derive(Model, Default)]
/// struct Database {
///     url: String,
///     pool: u32,
/// }
///
/// let mut db = Database::default();
/// let pool = (&mut db as &mut dyn Model).field_mut_by_name("pool").unwrap();
/// *pool.downcast_mut::<u32>().unwrap() = 8;
///
/// assert_eq!(db.pool, 8);
/// assert!(db.field(2).is_none());
/// ```
///
/// [`derive::Model`]: crate::derive::Model
pub trait Model: Configurable {
    /// Returns the static field table of this type.
    fn info() -> &'static ModelInfo
    where
        Self: Sized;

    /// Returns the static field table of the underlying type.
    fn model_info(&self) -> &'static ModelInfo;

    /// Returns the field at `index` of [`ModelInfo::fields`].
    fn field(&self, index: usize) -> Option<&dyn Configurable>;

    /// Returns the field at `index` of [`ModelInfo::fields`], mutably.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Configurable>;

    /// Restores every field to the type's default.
    fn reset(&mut self);
}

impl dyn Model {
    /// Returns the field stored under `name`.
    pub fn field_by_name(&self, name: &str) -> Option<&dyn Configurable> {
        let index = self.model_info().field_index(name)?;
        self.field(index)
    }

    /// Returns the field stored under `name`, mutably.
    pub fn field_mut_by_name(&mut self, name: &str) -> Option<&mut dyn Configurable> {
        let index = self.model_info().field_index(name)?;
        self.field_mut(index)
    }

    /// Iterates over the field table paired with the live field values.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldInfo, &dyn Configurable)> + '_ {
        self.model_info()
            .fields()
            .iter()
            .enumerate()
            .filter_map(|(index, info)| Some((info, self.field(index)?)))
    }

    /// Builds a fresh default instance of the same type.
    #[inline]
    pub fn default_instance(&self) -> Box<dyn Model> {
        self.model_info().default_instance()
    }
}

use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ModelError

/// A failure that aborts a whole engine call.
///
/// Values that merely fail to match their field are never reported here;
/// those fields are skipped and logged at `debug` level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("field `{path}` has type `{type_name}` with no configuration shape and no hook")]
    UnsupportedShape {
        path: String,
        type_name: &'static str,
    },

    #[error("model type `{type_name}` contains itself through `{path}`")]
    CyclicModel {
        path: String,
        type_name: &'static str,
    },

    #[error("hook for field `{path}` does not handle values of type `{type_name}`")]
    HookTypeMismatch {
        path: String,
        type_name: &'static str,
    },

    #[error("model `{model}` has no field named `{field}`")]
    UnknownField {
        model: &'static str,
        field: String,
    },
}

impl ModelError {
    /// The dotted field path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::UnsupportedShape { path, .. }
            | Self::CyclicModel { path, .. }
            | Self::HookTypeMismatch { path, .. } => path,
            Self::UnknownField { field, .. } => field,
        }
    }
}

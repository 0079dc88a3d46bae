//! Chain construction errors.

use thiserror::Error;

use crate::layer::LayerKind;

/// Errors that can occur while assembling a chain from layer names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// A layer name did not match any known layer.
    #[error("unknown layer '{name}' (expected one of: audit, access, cache)")]
    UnknownLayer {
        /// The rejected name.
        name: String,
    },

    /// The same layer was listed more than once.
    #[error("layer '{kind}' listed more than once")]
    DuplicateLayer {
        /// The repeated layer.
        kind: LayerKind,
    },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

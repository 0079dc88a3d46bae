//! Prelude module - commonly used types for convenient import.
//!
//! Use `use docward_chain::prelude::*;` to import all essential types.

// Composition
pub use crate::{ChainBuilder, Layer, LayerKind, ReferenceChain};

// Base service
pub use crate::CoreService;

// Errors
pub use crate::{ChainError, ChainResult};

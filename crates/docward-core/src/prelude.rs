//! Prelude module - commonly used types for convenient import.
//!
//! Use `use docward_core::prelude::*;` to import all essential types.

// Errors
pub use crate::{DocumentError, DocumentResult};

// Contract
pub use crate::{DocumentService, Lookup};

// Domain types
pub use crate::{ClearanceLevel, Document, DocumentId, SecurityLevel, Timestamp, User};

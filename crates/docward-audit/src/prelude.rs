//! Prelude module - commonly used types for convenient import.
//!
//! Use `use docward_audit::prelude::*;` to import all essential types.

// Entry types
pub use crate::{AuditEntry, AuditEntryId, AuditOperation};

// Log and layer
pub use crate::{AuditLayer, AuditLog};

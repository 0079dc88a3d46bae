//! Prelude module - commonly used types for convenient import.
//!
//! Use `use docward_access::prelude::*;` to import all essential types.

pub use crate::{AccessControlLayer, AccessDecision, check_access};

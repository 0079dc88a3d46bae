//! Prelude module - commonly used types for convenient import.
//!
//! Use `use docward_cache::prelude::*;` to import all essential types.

pub use crate::{CacheConfig, CacheStats, CachingLayer, DocumentCache};

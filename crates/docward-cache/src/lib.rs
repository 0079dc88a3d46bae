//! Docward Cache - Read-through snapshot cache for document lookups.
//!
//! This crate provides:
//! - [`DocumentCache`], the shared snapshot store with an optional FIFO bound
//! - [`CachingLayer`], a [`DocumentService`](docward_core::DocumentService)
//!   wrapper that answers repeated views from the store
//! - [`CacheConfig`] and [`CacheStats`]
//!
//! # Placement
//!
//! The cache keys on document id only. It must sit beneath access control,
//! otherwise a snapshot fetched for one user is handed to the next without
//! a clearance check.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docward_cache::{CacheConfig, CachingLayer, DocumentCache};
//! use docward_core::{
//!     ClearanceLevel, Document, DocumentId, DocumentService, Lookup, SecurityLevel, User,
//! };
//!
//! struct One;
//! impl DocumentService for One {
//!     fn view(&self, id: &DocumentId, _: &User) -> Lookup {
//!         Lookup::Found(Document::new(id.clone(), "Title", "body", SecurityLevel::new(1)))
//!     }
//!     fn update(&self, _: &DocumentId, _: &str, _: &User) {}
//! }
//!
//! let cache = Arc::new(DocumentCache::new(CacheConfig::default()));
//! let service = CachingLayer::new(Arc::new(One), Arc::clone(&cache));
//! let user = User::new("manager", ClearanceLevel::new(5));
//!
//! service.view(&DocumentId::new("DOC-1"), &user);
//! service.view(&DocumentId::new("DOC-1"), &user);
//!
//! let stats = cache.stats();
//! assert_eq!((stats.hits, stats.misses), (1, 1));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod config;
mod layer;
mod store;

pub use config::CacheConfig;
pub use layer::CachingLayer;
pub use store::{CacheStats, DocumentCache, Generation};

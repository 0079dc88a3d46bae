//! Docward Chain - Composition of the document-access layers.
//!
//! This crate provides:
//! - [`CoreService`], the innermost service over a repository
//! - [`Layer`] and [`LayerKind`], descriptors for the built-in layers
//! - [`ChainBuilder`], which folds layers (outermost first) around a base
//! - [`ReferenceChain`], a wired chain that keeps handles to its audit log
//!   and cache
//!
//! # Order matters
//!
//! The reference chain is `Audit(Access(Cache(Core)))`:
//!
//! - audit outermost, so every attempt is recorded before anything can
//!   short-circuit it
//! - access above cache, so clearance is checked even when the answer is
//!   a cached snapshot
//!
//! Other orders build, but a cache outside access control is logged as a
//! warning.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docward_cache::CacheConfig;
//! use docward_chain::ReferenceChain;
//! use docward_core::{ClearanceLevel, DocumentId, DocumentService, User};
//! use docward_storage::{Latency, MemoryDocumentRepository};
//!
//! let repository = Arc::new(MemoryDocumentRepository::seeded(Latency::none()));
//! let chain = ReferenceChain::new(repository, CacheConfig::default());
//!
//! let employee = User::new("employee", ClearanceLevel::new(2));
//! assert!(chain.view(&DocumentId::new("DOC-002"), &employee).is_denied());
//! assert!(chain.view(&DocumentId::new("DOC-003"), &employee).is_found());
//! assert_eq!(chain.audit_log().len(), 2);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod builder;
mod error;
mod layer;
mod reference;
mod service;

pub use builder::{ChainBuilder, cache_outside_access};
pub use error::{ChainError, ChainResult};
pub use layer::{Layer, LayerKind};
pub use reference::ReferenceChain;
pub use service::CoreService;

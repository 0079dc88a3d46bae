//! Docward Audit - Append-only record of every access attempt.
//!
//! This crate provides:
//! - [`AuditEntry`] records (timestamp, username, operation, document id)
//! - [`AuditLog`], an in-process append-only log owned by whoever builds
//!   the chain
//! - [`AuditLayer`], a [`DocumentService`](docward_core::DocumentService)
//!   wrapper that appends one entry per call before delegating
//!
//! # What is recorded
//!
//! Attempts, not outcomes. A view that is later denied, answered from a
//! cache, or aimed at a missing id still produces exactly one entry.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docward_audit::{AuditLayer, AuditLog, AuditOperation};
//! use docward_core::{ClearanceLevel, DocumentId, DocumentService, Lookup, User};
//!
//! struct Nothing;
//! impl DocumentService for Nothing {
//!     fn view(&self, _: &DocumentId, _: &User) -> Lookup { Lookup::NotFound }
//!     fn update(&self, _: &DocumentId, _: &str, _: &User) {}
//! }
//!
//! let log = Arc::new(AuditLog::new());
//! let service = AuditLayer::new(Arc::new(Nothing), Arc::clone(&log));
//!
//! let user = User::new("manager", ClearanceLevel::new(5));
//! service.view(&DocumentId::new("DOC-404"), &user);
//!
//! let entries = log.entries();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].operation, AuditOperation::View);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod entry;
mod layer;
mod log;

pub use entry::{AuditEntry, AuditEntryId, AuditOperation};
pub use layer::AuditLayer;
pub use log::AuditLog;

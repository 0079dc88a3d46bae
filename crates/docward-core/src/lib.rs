//! Docward Core - Foundation types and the document-access contract.
//!
//! This crate provides:
//! - The [`DocumentService`] contract implemented by the core service and
//!   every interception layer
//! - The tagged [`Lookup`] result returned by `view`
//! - Domain types: [`Document`], [`DocumentId`], [`User`], and the two
//!   comparable levels [`ClearanceLevel`] and [`SecurityLevel`]
//! - Error types for parsing identifiers and levels from text
//!
//! # Example
//!
//! ```
//! use docward_core::{ClearanceLevel, Document, SecurityLevel, User};
//!
//! let doc = Document::new("DOC-002", "Market Strategy 2025", "plans", SecurityLevel::new(5));
//! let manager = User::new("manager", ClearanceLevel::new(5));
//! let employee = User::new("employee", ClearanceLevel::new(2));
//!
//! assert!(manager.can_access(&doc));
//! assert!(!employee.can_access(&doc));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod document;
mod error;
mod service;
mod types;

pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use service::{DocumentService, Lookup};
pub use types::{ClearanceLevel, DocumentId, SecurityLevel, Timestamp, User};

//! Docward Storage - the document repository collaborator.
//!
//! The repository is an opaque keyed store. This crate provides:
//! - The [`DocumentRepository`] trait (`get` / `update`)
//! - [`MemoryDocumentRepository`], an in-memory store seeded with the
//!   reference catalogue
//! - [`Latency`], the injectable delay applied to each store call
//! - [`LazyRepository`], which defers building the real store (and paying
//!   its connect cost) until first use
//!
//! # Example
//!
//! ```
//! use docward_core::DocumentId;
//! use docward_storage::{DocumentRepository, Latency, MemoryDocumentRepository};
//!
//! let repo = MemoryDocumentRepository::seeded(Latency::none());
//! let doc = repo.get(&DocumentId::new("DOC-003")).unwrap();
//! assert_eq!(doc.title(), "Employee Handbook");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod latency;
mod lazy;
mod memory;
mod repository;
mod seed;

pub use latency::{Latency, RepositoryOp};
pub use lazy::LazyRepository;
pub use memory::MemoryDocumentRepository;
pub use repository::DocumentRepository;
pub use seed::reference_catalogue;

//! Docward Test - Shared test utilities for docward.
//!
//! This crate provides fixtures, recording mocks and harness helpers that
//! can be used across docward crates as a dev-dependency.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! docward-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust,ignore
//! use docward_test::{RecordingRepository, test_employee};
//!
//! #[test]
//! fn test_repository_is_queried_once() {
//!     let repo = RecordingRepository::seeded();
//!     // ... build a chain over `repo.clone()` and exercise it
//!     assert_eq!(repo.get_count(&"DOC-001".into()), 1);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;

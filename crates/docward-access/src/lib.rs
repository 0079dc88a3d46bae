//! Docward Access - Clearance checks in front of the document service.
//!
//! Access is granted iff the caller's clearance is at least the document's
//! security level. [`AccessControlLayer`] applies [`check_access`] to every
//! view, and guards every update with a view of its own.
//!
//! # Security Check Flow
//!
//! 1. **Lookup** - ask the wrapped service for the document
//!    - Missing -> `NotFound`
//!    - Already denied further in -> propagate
//! 2. **Clearance** - compare levels
//!    - Insufficient -> `Denied` (and no update delegation)
//! 3. **Delegate** - return the document, or forward the update

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod decision;
mod layer;

pub use decision::{AccessDecision, check_access};
pub use layer::AccessControlLayer;

//! Document error types.

use thiserror::Error;

/// Errors raised when building domain values from untrusted text.
///
/// Ordinary "not found" and "not permitted" outcomes are not errors; they
/// are variants of [`Lookup`](crate::Lookup).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// Document identifier was empty or contained only whitespace.
    #[error("document id must not be empty")]
    EmptyId,

    /// Username was empty or contained only whitespace.
    #[error("username must not be empty")]
    EmptyUsername,

    /// A level could not be parsed as a non-negative integer.
    #[error("invalid level '{value}': {reason}")]
    InvalidLevel {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

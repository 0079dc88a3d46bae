//! Common types used throughout docward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::Document;
use crate::error::{DocumentError, DocumentResult};

/// Stable key of a document in the repository.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document ID without validation.
    ///
    /// Use [`DocumentId::parse`] for untrusted input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a document ID from untrusted text, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EmptyId`] if nothing is left after trimming.
    pub fn parse(raw: &str) -> DocumentResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DocumentError::EmptyId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn parse_level(raw: &str) -> DocumentResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| DocumentError::InvalidLevel {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Minimum clearance a user needs to see or edit a document.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SecurityLevel(u32);

impl SecurityLevel {
    /// Create a security level.
    #[must_use]
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Get the raw level.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SecurityLevel {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s).map(Self)
    }
}

/// Clearance held by a user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClearanceLevel(u32);

impl ClearanceLevel {
    /// Create a clearance level.
    #[must_use]
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Get the raw level.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this clearance is sufficient for a document at `required`.
    ///
    /// This comparison is the only authority for both view and edit
    /// permission.
    #[must_use]
    pub const fn permits(self, required: SecurityLevel) -> bool {
        self.0 >= required.0
    }
}

impl fmt::Display for ClearanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClearanceLevel {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s).map(Self)
    }
}

/// The acting user, supplied by the caller for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Display name recorded in the audit log.
    pub username: String,
    /// Clearance compared against each document's security level.
    pub clearance: ClearanceLevel,
}

impl User {
    /// Create a user.
    #[must_use]
    pub fn new(username: impl Into<String>, clearance: ClearanceLevel) -> Self {
        Self {
            username: username.into(),
            clearance,
        }
    }

    /// Create a user from untrusted text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EmptyUsername`] for a blank name.
    pub fn parse(username: &str, clearance: ClearanceLevel) -> DocumentResult<Self> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(DocumentError::EmptyUsername);
        }
        Ok(Self::new(trimmed, clearance))
    }

    /// Whether this user may view or edit `document`.
    #[must_use]
    pub fn can_access(&self, document: &Document) -> bool {
        self.clearance.permits(document.security_level())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (clearance {})", self.username, self.clearance)
    }
}

/// Timestamp wrapper for consistent handling throughout docward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

//! Audit entry types.
//!
//! Entries are immutable once created: the log hands out clones, never
//! references into its storage.

use docward_core::{DocumentId, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditEntryId(pub Uuid);

impl AuditEntryId {
    /// Create a new audit entry ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuditEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self.0.simple().to_string();
        write!(f, "audit:{}", id.get(..8).unwrap_or(&id))
    }
}

/// Kind of operation attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOperation {
    /// A `view` call.
    View,
    /// An `update` call.
    Edit,
}

impl AuditOperation {
    /// Verb used in human-readable descriptions.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

impl std::fmt::Display for AuditOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}

/// A single audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry identifier.
    pub id: AuditEntryId,
    /// When the attempt was made.
    pub timestamp: Timestamp,
    /// Who made the attempt.
    pub username: String,
    /// What was attempted.
    pub operation: AuditOperation,
    /// Which document was targeted.
    pub document_id: DocumentId,
}

impl AuditEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        operation: AuditOperation,
        document_id: DocumentId,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            timestamp: Timestamp::now(),
            username: username.into(),
            operation,
            document_id,
        }
    }

    /// Get a human-readable description of the attempt.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} attempted to {} {}",
            self.username, self.operation, self.document_id
        )
    }
}

impl std::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.0.format("%H:%M:%S"),
            self.description()
        )
    }
}

//! Audit log - main interface for recording and querying attempts.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use docward_core::DocumentId;
use tracing::info;

use crate::entry::{AuditEntry, AuditEntryId, AuditOperation};

/// Append-only, in-process audit log.
///
/// Each chain owns its own log (supplied to [`AuditLayer`](crate::AuditLayer)
/// through its constructor), so independently built chains never share
/// entries. Reads return snapshots; entries are never mutated or removed.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl AuditLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attempt and return its entry ID.
    pub fn append(
        &self,
        username: &str,
        operation: AuditOperation,
        document_id: &DocumentId,
    ) -> AuditEntryId {
        let entry = AuditEntry::new(username, operation, document_id.clone());
        let entry_id = entry.id.clone();

        info!(
            entry_id = %entry_id,
            username,
            operation = %operation,
            document_id = %document_id,
            "{}",
            entry.description()
        );

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);

        entry_id
    }

    /// All entries recorded so far, in append order.
    #[must_use]
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.read(|entries| entries.to_vec())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read(<[AuditEntry]>::len)
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries made by `username`, in append order.
    #[must_use]
    pub fn entries_for_user(&self, username: &str) -> Vec<AuditEntry> {
        self.filtered(|e| e.username == username)
    }

    /// Entries targeting `document_id`, in append order.
    #[must_use]
    pub fn entries_for_document(&self, document_id: &DocumentId) -> Vec<AuditEntry> {
        self.filtered(|e| &e.document_id == document_id)
    }

    /// Entries of the given operation kind, in append order.
    #[must_use]
    pub fn entries_for_operation(&self, operation: AuditOperation) -> Vec<AuditEntry> {
        self.filtered(|e| e.operation == operation)
    }

    /// Entries stamped within `[start, end]`, in append order.
    #[must_use]
    pub fn entries_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<AuditEntry> {
        self.filtered(|e| e.timestamp.0 >= start && e.timestamp.0 <= end)
    }

    /// Render the log as JSON lines, one entry per line.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry fails to serialize.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for entry in self.entries() {
            out.push_str(&serde_json::to_string(&entry)?);
            out.push('\n');
        }
        Ok(out)
    }

    fn filtered(&self, predicate: impl Fn(&AuditEntry) -> bool) -> Vec<AuditEntry> {
        self.read(|entries| entries.iter().filter(|e| predicate(e)).cloned().collect())
    }

    fn read<T>(&self, f: impl FnOnce(&[AuditEntry]) -> T) -> T {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f(&entries)
    }
}

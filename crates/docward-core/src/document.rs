//! The confidential document record.

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, SecurityLevel};

/// A confidential document.
///
/// The repository owns the authoritative record; layers above it only ever
/// hold snapshot clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    id: DocumentId,
    title: String,
    content: String,
    security_level: SecurityLevel,
    size_bytes: u64,
}

/// Wire shape without the derived size.
#[derive(Deserialize)]
struct RawDocument {
    id: DocumentId,
    title: String,
    content: String,
    security_level: SecurityLevel,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::new(raw.id, raw.title, raw.content, raw.security_level)
    }
}

impl Document {
    /// Create a document. The size is derived from `content`.
    #[must_use]
    pub fn new(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        content: impl Into<String>,
        security_level: SecurityLevel,
    ) -> Self {
        let content = content.into();
        Self {
            id: id.into(),
            title: title.into(),
            size_bytes: estimated_size(&content),
            content,
            security_level,
        }
    }

    /// Document identifier.
    #[must_use]
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Clearance required to view or edit this document.
    #[must_use]
    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    /// Informational size: two bytes per character of content.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in whole mebibytes, rounded down.
    #[must_use]
    pub fn size_mib(&self) -> u64 {
        self.size_bytes / (1024 * 1024)
    }

    /// Replace the content and recompute the size.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.size_bytes = estimated_size(&self.content);
    }
}

fn estimated_size(content: &str) -> u64 {
    u64::try_from(content.chars().count())
        .unwrap_or(u64::MAX)
        .saturating_mul(2)
}

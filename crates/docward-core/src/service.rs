//! The document-access contract.
//!
//! [`DocumentService`] is implemented by the core service and by every
//! interception layer. A caller holding any implementation cannot tell it
//! apart from another, which is what makes layers freely stackable.

use std::sync::Arc;

use crate::document::Document;
use crate::types::{ClearanceLevel, DocumentId, SecurityLevel, User};

/// Outcome of a `view` call.
///
/// `NotFound` and `Denied` are ordinary outcomes, not errors. Callers that
/// only need presence use [`Lookup::into_document`], which collapses both
/// to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The document exists and the caller is entitled to it.
    Found(Document),
    /// No document with that id exists.
    NotFound,
    /// The document exists but the caller's clearance is too low.
    Denied {
        /// Level the document requires.
        required: SecurityLevel,
        /// Level the caller holds.
        clearance: ClearanceLevel,
    },
}

impl Lookup {
    /// Build a lookup from an optional document.
    #[must_use]
    pub fn from_option(document: Option<Document>) -> Self {
        document.map_or(Self::NotFound, Self::Found)
    }

    /// Collapse to the presence-only view of the result.
    #[must_use]
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Found(doc) => Some(doc),
            Self::NotFound | Self::Denied { .. } => None,
        }
    }

    /// Borrow the document, if found.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        match self {
            Self::Found(doc) => Some(doc),
            Self::NotFound | Self::Denied { .. } => None,
        }
    }

    /// Whether a document was returned.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether access was refused.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }

    /// Short label for logs and reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::Denied { .. } => "denied",
        }
    }
}

/// Document-access contract.
///
/// Implementations must be thread-safe. Neither operation fails: a missing
/// document or insufficient clearance is reported through [`Lookup`] on
/// `view` and is a silent no-op on `update`.
pub trait DocumentService: Send + Sync {
    /// Fetch a document on behalf of `user`.
    fn view(&self, id: &DocumentId, user: &User) -> Lookup;

    /// Replace a document's content on behalf of `user`.
    ///
    /// Gives no signal of whether anything changed.
    fn update(&self, id: &DocumentId, content: &str, user: &User);
}

impl<T: DocumentService + ?Sized> DocumentService for Arc<T> {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        (**self).view(id, user)
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        (**self).update(id, content, user);
    }
}

impl<T: DocumentService + ?Sized> DocumentService for Box<T> {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        (**self).view(id, user)
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        (**self).update(id, content, user);
    }
}

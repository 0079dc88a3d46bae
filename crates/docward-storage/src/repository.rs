//! Repository trait.

use std::sync::Arc;

use docward_core::{Document, DocumentId};

/// Storage backend for documents.
///
/// The store is assumed always available, so neither call can fail.
pub trait DocumentRepository: Send + Sync {
    /// Load a snapshot of the document, or `None` if no such id exists.
    fn get(&self, id: &DocumentId) -> Option<Document>;

    /// Replace the document's content. Unknown ids are ignored.
    fn update(&self, id: &DocumentId, content: &str);
}

impl<T: DocumentRepository + ?Sized> DocumentRepository for Arc<T> {
    fn get(&self, id: &DocumentId) -> Option<Document> {
        (**self).get(id)
    }

    fn update(&self, id: &DocumentId, content: &str) {
        (**self).update(id, content);
    }
}

//! In-memory document store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use docward_core::{Document, DocumentId};
use tracing::debug;

use crate::latency::{Latency, RepositoryOp};
use crate::repository::DocumentRepository;
use crate::seed::reference_catalogue;

/// In-memory keyed store with simulated latency.
pub struct MemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, Document>>,
    latency: Latency,
}

impl MemoryDocumentRepository {
    /// Open a store holding `documents`.
    ///
    /// Blocks for the configured connect latency. A later document with
    /// the same id replaces an earlier one.
    #[must_use]
    pub fn with_documents(documents: impl IntoIterator<Item = Document>, latency: Latency) -> Self {
        debug!("opening document store");
        latency.wait(RepositoryOp::Connect);

        let documents: HashMap<_, _> = documents
            .into_iter()
            .map(|doc| (doc.id().clone(), doc))
            .collect();
        debug!(documents = documents.len(), "document store ready");

        Self {
            documents: RwLock::new(documents),
            latency,
        }
    }

    /// Open an empty store.
    #[must_use]
    pub fn empty(latency: Latency) -> Self {
        Self::with_documents(Vec::new(), latency)
    }

    /// Open a store seeded with the reference catalogue.
    #[must_use]
    pub fn seeded(latency: Latency) -> Self {
        Self::with_documents(reference_catalogue(), latency)
    }

    /// Insert or replace a document directly, bypassing latency.
    pub fn insert(&self, document: Document) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(document.id().clone(), document);
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured latency.
    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency
    }
}

impl DocumentRepository for MemoryDocumentRepository {
    fn get(&self, id: &DocumentId) -> Option<Document> {
        debug!(document_id = %id, "loading document from store");
        self.latency.wait(RepositoryOp::Get);

        let doc = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned();

        if let Some(doc) = &doc {
            debug!(document_id = %id, size_mib = doc.size_mib(), "document loaded");
        }
        doc
    }

    fn update(&self, id: &DocumentId, content: &str) {
        debug!(document_id = %id, "updating document in store");
        self.latency.wait(RepositoryOp::Update);

        let mut documents = self
            .documents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(doc) = documents.get_mut(id) {
            doc.set_content(content);
        }
    }
}

impl std::fmt::Debug for MemoryDocumentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDocumentRepository")
            .field("documents", &self.len())
            .field("latency", &self.latency)
            .finish()
    }
}

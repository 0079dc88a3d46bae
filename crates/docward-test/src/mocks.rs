//! Mock implementations for testing.

use std::sync::{Arc, Mutex, PoisonError};

use docward_core::{
    ClearanceLevel, Document, DocumentId, DocumentService, Lookup, SecurityLevel, User,
};
use docward_storage::{DocumentRepository, Latency, MemoryDocumentRepository};

use crate::fixtures::reference_documents;

/// A call observed by a [`RecordingRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    /// `get(id)`.
    Get(DocumentId),
    /// `update(id, content)`.
    Update(DocumentId, String),
}

type GetHook = Arc<dyn Fn(&DocumentId) + Send + Sync>;

/// Repository that records every call before serving it from memory.
///
/// Clones share the same store and call log, so a test can hand one clone
/// to a chain and inspect another.
#[derive(Clone)]
pub struct RecordingRepository {
    store: Arc<MemoryDocumentRepository>,
    calls: Arc<Mutex<Vec<RepositoryCall>>>,
    on_get: Option<GetHook>,
}

impl RecordingRepository {
    /// Create a repository holding `documents`.
    #[must_use]
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            store: Arc::new(MemoryDocumentRepository::with_documents(
                documents,
                Latency::none(),
            )),
            calls: Arc::new(Mutex::new(Vec::new())),
            on_get: None,
        }
    }

    /// Create a repository holding the reference catalogue.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(reference_documents())
    }

    /// Run `hook` inside every `get`, after the store has been read and
    /// before the snapshot is returned. Lets a test park a reader that is
    /// holding content a concurrent writer is about to replace.
    #[must_use]
    pub fn with_get_hook(mut self, hook: impl Fn(&DocumentId) + Send + Sync + 'static) -> Self {
        self.on_get = Some(Arc::new(hook));
        self
    }

    /// All calls so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `get` calls for `id`.
    #[must_use]
    pub fn get_count(&self, id: &DocumentId) -> usize {
        self.count(|call| matches!(call, RepositoryCall::Get(got) if got == id))
    }

    /// Number of `update` calls for `id`.
    #[must_use]
    pub fn update_count(&self, id: &DocumentId) -> usize {
        self.count(|call| matches!(call, RepositoryCall::Update(got, _) if got == id))
    }

    /// Total number of `get` calls.
    #[must_use]
    pub fn total_gets(&self) -> usize {
        self.count(|call| matches!(call, RepositoryCall::Get(_)))
    }

    /// Read a stored document without recording the call.
    #[must_use]
    pub fn peek(&self, id: &DocumentId) -> Option<Document> {
        self.store.get(id)
    }

    fn count(&self, predicate: impl Fn(&RepositoryCall) -> bool) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|c| predicate(c))
            .count()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl DocumentRepository for RecordingRepository {
    fn get(&self, id: &DocumentId) -> Option<Document> {
        self.record(RepositoryCall::Get(id.clone()));
        let document = self.store.get(id);
        if let Some(hook) = &self.on_get {
            hook(id);
        }
        document
    }

    fn update(&self, id: &DocumentId, content: &str) {
        self.record(RepositoryCall::Update(id.clone(), content.to_string()));
        self.store.update(id, content);
    }
}

impl std::fmt::Debug for RecordingRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRepository")
            .field("documents", &self.store.len())
            .field("calls", &self.calls().len())
            .finish_non_exhaustive()
    }
}

/// A call observed by a [`RecordingService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    /// `view(id, user)`.
    View {
        /// Requested document.
        id: DocumentId,
        /// Caller.
        username: String,
    },
    /// `update(id, content, user)`.
    Update {
        /// Target document.
        id: DocumentId,
        /// New content.
        content: String,
        /// Caller.
        username: String,
    },
}

/// Stub [`DocumentService`] returning a fixed lookup and recording calls.
#[derive(Debug, Clone)]
pub struct RecordingService {
    response: Lookup,
    calls: Arc<Mutex<Vec<ServiceCall>>>,
}

impl RecordingService {
    /// Always answer `view` with `response`.
    #[must_use]
    pub fn new(response: Lookup) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer `NotFound`.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(Lookup::NotFound)
    }

    /// Always answer `Found(document)`.
    #[must_use]
    pub fn returning(document: Document) -> Self {
        Self::new(Lookup::Found(document))
    }

    /// Always answer `Denied` (level 5 required, none held).
    #[must_use]
    pub fn denying() -> Self {
        Self::new(Lookup::Denied {
            required: SecurityLevel::new(5),
            clearance: ClearanceLevel::new(0),
        })
    }

    /// All calls so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls per kind, as `(views, updates)`.
    #[must_use]
    pub fn call_counts(&self) -> (usize, usize) {
        let calls = self.calls();
        let views = calls
            .iter()
            .filter(|c| matches!(c, ServiceCall::View { .. }))
            .count();
        (views, calls.len().saturating_sub(views))
    }

    fn record(&self, call: ServiceCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl DocumentService for RecordingService {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        self.record(ServiceCall::View {
            id: id.clone(),
            username: user.username.clone(),
        });
        self.response.clone()
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        self.record(ServiceCall::Update {
            id: id.clone(),
            content: content.to_string(),
            username: user.username.clone(),
        });
    }
}

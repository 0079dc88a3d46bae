//! Deferred repository construction.

use std::sync::{Arc, OnceLock};

use docward_core::{Document, DocumentId};
use tracing::debug;

use crate::repository::DocumentRepository;

type Factory = Box<dyn Fn() -> Arc<dyn DocumentRepository> + Send + Sync>;

/// Repository that is only built on first use.
///
/// Building a store can be expensive (see
/// [`Latency::connect`](crate::Latency::connect)); a process that never
/// touches a document never pays for it. The factory runs at most once,
/// even when several threads race on first use.
pub struct LazyRepository {
    factory: Factory,
    inner: OnceLock<Arc<dyn DocumentRepository>>,
}

impl LazyRepository {
    /// Wrap a factory that opens the real repository.
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn DocumentRepository> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            inner: OnceLock::new(),
        }
    }

    /// Whether the underlying repository has been built yet.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.get().is_some()
    }

    fn repository(&self) -> &Arc<dyn DocumentRepository> {
        self.inner.get_or_init(|| {
            debug!("connecting lazy repository on first use");
            (self.factory)()
        })
    }
}

impl DocumentRepository for LazyRepository {
    fn get(&self, id: &DocumentId) -> Option<Document> {
        self.repository().get(id)
    }

    fn update(&self, id: &DocumentId, content: &str) {
        self.repository().update(id, content);
    }
}

impl std::fmt::Debug for LazyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyRepository")
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

//! Caching interception layer.

use std::sync::Arc;

use docward_core::{DocumentId, DocumentService, Lookup, User};
use tracing::debug;

use crate::store::DocumentCache;

/// Answers repeated views from a [`DocumentCache`].
///
/// Only `Found` results are stored. Every update invalidates the id before
/// delegating, whether or not the update goes on to change anything, and
/// again once the write returns: a read that started between the two and
/// saw the old content cannot leave it behind.
pub struct CachingLayer {
    inner: Arc<dyn DocumentService>,
    cache: Arc<DocumentCache>,
}

impl CachingLayer {
    /// Wrap `inner`, storing snapshots in `cache`.
    #[must_use]
    pub fn new(inner: Arc<dyn DocumentService>, cache: Arc<DocumentCache>) -> Self {
        Self { inner, cache }
    }

    /// The backing store.
    #[must_use]
    pub fn cache(&self) -> &Arc<DocumentCache> {
        &self.cache
    }
}

impl DocumentService for CachingLayer {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        if let Some(document) = self.cache.get(id) {
            debug!(document_id = %id, username = %user.username, "cache hit");
            return Lookup::Found(document);
        }

        debug!(document_id = %id, username = %user.username, "cache miss");
        let seen = self.cache.generation();
        let lookup = self.inner.view(id, user);
        if let Lookup::Found(document) = &lookup {
            self.cache.insert(document.clone(), seen);
        }
        lookup
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        self.cache.invalidate(id);
        self.inner.update(id, content, user);
        self.cache.invalidate(id);
    }
}

impl std::fmt::Debug for CachingLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingLayer")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

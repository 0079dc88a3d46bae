//! A fully wired chain with handles to its shared state.

use std::collections::HashSet;
use std::sync::Arc;

use docward_audit::AuditLog;
use docward_cache::{CacheConfig, DocumentCache};
use docward_core::{DocumentId, DocumentService, Lookup, User};
use docward_storage::DocumentRepository;

use crate::builder::ChainBuilder;
use crate::error::{ChainError, ChainResult};
use crate::layer::{Layer, LayerKind};
use crate::service::CoreService;

/// A composed chain plus the audit log and cache it writes to.
///
/// Every chain gets its own log and cache; two chains built from the same
/// repository share nothing but the repository.
pub struct ReferenceChain {
    service: Arc<dyn DocumentService>,
    audit_log: Arc<AuditLog>,
    cache: Arc<DocumentCache>,
    kinds: Vec<LayerKind>,
}

impl ReferenceChain {
    /// Build `Audit(Access(Cache(Core)))` over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn DocumentRepository>, cache_config: CacheConfig) -> Self {
        Self::assemble(repository, &LayerKind::REFERENCE_ORDER, cache_config)
    }

    /// Build the given layers, outermost first, over `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DuplicateLayer`] if a kind is repeated.
    pub fn with_layers(
        repository: Arc<dyn DocumentRepository>,
        kinds: &[LayerKind],
        cache_config: CacheConfig,
    ) -> ChainResult<Self> {
        let mut seen = HashSet::new();
        for kind in kinds {
            if !seen.insert(*kind) {
                return Err(ChainError::DuplicateLayer { kind: *kind });
            }
        }
        Ok(Self::assemble(repository, kinds, cache_config))
    }

    /// Build from layer names such as `["audit", "access", "cache"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownLayer`] for an unrecognized name and
    /// [`ChainError::DuplicateLayer`] for a repeated one.
    pub fn from_names<S: AsRef<str>>(
        repository: Arc<dyn DocumentRepository>,
        names: &[S],
        cache_config: CacheConfig,
    ) -> ChainResult<Self> {
        let kinds = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<ChainResult<Vec<LayerKind>>>()?;
        Self::with_layers(repository, &kinds, cache_config)
    }

    /// The composed service.
    #[must_use]
    pub fn service(&self) -> &Arc<dyn DocumentService> {
        &self.service
    }

    /// The log written by the audit layer (empty if the chain has none).
    #[must_use]
    pub fn audit_log(&self) -> &Arc<AuditLog> {
        &self.audit_log
    }

    /// The store used by the cache layer (unused if the chain has none).
    #[must_use]
    pub fn cache(&self) -> &Arc<DocumentCache> {
        &self.cache
    }

    /// Layer kinds, outermost first.
    #[must_use]
    pub fn kinds(&self) -> &[LayerKind] {
        &self.kinds
    }

    fn assemble(
        repository: Arc<dyn DocumentRepository>,
        kinds: &[LayerKind],
        cache_config: CacheConfig,
    ) -> Self {
        let audit_log = Arc::new(AuditLog::new());
        let cache = Arc::new(DocumentCache::new(cache_config));

        let layers = kinds.iter().map(|kind| match kind {
            LayerKind::Audit => Layer::audit(Arc::clone(&audit_log)),
            LayerKind::Access => Layer::access(),
            LayerKind::Cache => Layer::cache(Arc::clone(&cache)),
        });
        let service = ChainBuilder::new(Arc::new(CoreService::new(repository)))
            .layers(layers)
            .build();

        Self {
            service,
            audit_log,
            cache,
            kinds: kinds.to_vec(),
        }
    }
}

impl DocumentService for ReferenceChain {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        self.service.view(id, user)
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        self.service.update(id, content, user);
    }
}

impl std::fmt::Debug for ReferenceChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceChain")
            .field("kinds", &self.kinds)
            .field("audit_entries", &self.audit_log.len())
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

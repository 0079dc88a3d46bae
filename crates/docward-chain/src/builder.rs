//! Ordered chain assembly.

use std::sync::Arc;

use docward_core::DocumentService;
use tracing::{debug, warn};

use crate::layer::{Layer, LayerKind};

/// Folds layers around a base service.
///
/// Layers are listed outermost first: `.layer(a).layer(b)` produces
/// `a(b(base))`. The builder never reorders.
///
/// ```
/// use std::sync::Arc;
/// use docward_audit::AuditLog;
/// use docward_cache::DocumentCache;
/// use docward_chain::{ChainBuilder, CoreService, Layer};
/// use docward_storage::{Latency, MemoryDocumentRepository};
///
/// let repository = Arc::new(MemoryDocumentRepository::seeded(Latency::none()));
/// let service = ChainBuilder::new(Arc::new(CoreService::new(repository)))
///     .layer(Layer::audit(Arc::new(AuditLog::new())))
///     .layer(Layer::access())
///     .layer(Layer::cache(Arc::new(DocumentCache::default())))
///     .build();
/// # let _ = service;
/// ```
pub struct ChainBuilder {
    base: Arc<dyn DocumentService>,
    layers: Vec<Layer>,
}

impl ChainBuilder {
    /// Start from `base`, the innermost service.
    #[must_use]
    pub fn new(base: Arc<dyn DocumentService>) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// Add a layer inside every layer added so far.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Add several layers, outermost first.
    #[must_use]
    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Built-in kinds in the order added.
    #[must_use]
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().filter_map(Layer::kind).collect()
    }

    /// Compose the chain.
    ///
    /// Logs a warning if a cache sits outside access control, since cached
    /// snapshots would then reach callers without a clearance check.
    #[must_use]
    pub fn build(self) -> Arc<dyn DocumentService> {
        if cache_outside_access(&self.kinds()) {
            warn!(
                layers = ?self.layer_names(),
                "cache placed outside access control; cached documents bypass clearance checks"
            );
        }

        debug!(layers = ?self.layer_names(), "assembling document chain");
        self.layers
            .into_iter()
            .rev()
            .fold(self.base, |inner, layer| layer.wrap(inner))
    }

    fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(Layer::name).collect()
    }
}

impl std::fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

/// Whether a cache layer appears outside (before) an access layer.
///
/// Always `false` when either layer is absent.
#[must_use]
pub fn cache_outside_access(kinds: &[LayerKind]) -> bool {
    let cache = kinds.iter().position(|k| *k == LayerKind::Cache);
    let access = kinds.iter().position(|k| *k == LayerKind::Access);
    matches!((cache, access), (Some(c), Some(a)) if c < a)
}

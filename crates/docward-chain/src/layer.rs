//! Layer descriptors.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use docward_access::AccessControlLayer;
use docward_audit::{AuditLayer, AuditLog};
use docward_cache::{CachingLayer, DocumentCache};
use docward_core::DocumentService;
use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// The built-in layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Records every attempt.
    Audit,
    /// Enforces clearance.
    Access,
    /// Serves repeated views from snapshots.
    Cache,
}

impl LayerKind {
    /// Outer-to-inner order of the reference chain.
    pub const REFERENCE_ORDER: [Self; 3] = [Self::Audit, Self::Access, Self::Cache];

    /// Configuration name of this layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Access => "access",
            Self::Cache => "cache",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerKind {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audit" => Ok(Self::Audit),
            "access" => Ok(Self::Access),
            "cache" => Ok(Self::Cache),
            _ => Err(ChainError::UnknownLayer {
                name: s.to_string(),
            }),
        }
    }
}

type WrapFn = Box<dyn FnOnce(Arc<dyn DocumentService>) -> Arc<dyn DocumentService> + Send>;

/// A named constructor that wraps an inner service.
pub struct Layer {
    name: String,
    kind: Option<LayerKind>,
    wrap: WrapFn,
}

impl Layer {
    /// A custom layer built by `wrap`.
    pub fn custom<F>(name: impl Into<String>, wrap: F) -> Self
    where
        F: FnOnce(Arc<dyn DocumentService>) -> Arc<dyn DocumentService> + Send + 'static,
    {
        Self {
            name: name.into(),
            kind: None,
            wrap: Box::new(wrap),
        }
    }

    /// Audit layer appending to `log`.
    #[must_use]
    pub fn audit(log: Arc<AuditLog>) -> Self {
        Self::builtin(LayerKind::Audit, move |inner| {
            Arc::new(AuditLayer::new(inner, log))
        })
    }

    /// Access-control layer.
    #[must_use]
    pub fn access() -> Self {
        Self::builtin(LayerKind::Access, |inner| {
            Arc::new(AccessControlLayer::new(inner))
        })
    }

    /// Caching layer backed by `cache`.
    #[must_use]
    pub fn cache(cache: Arc<DocumentCache>) -> Self {
        Self::builtin(LayerKind::Cache, move |inner| {
            Arc::new(CachingLayer::new(inner, cache))
        })
    }

    /// Layer name, as shown in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Built-in kind, or `None` for custom layers.
    #[must_use]
    pub fn kind(&self) -> Option<LayerKind> {
        self.kind
    }

    pub(crate) fn wrap(self, inner: Arc<dyn DocumentService>) -> Arc<dyn DocumentService> {
        (self.wrap)(inner)
    }

    fn builtin<F>(kind: LayerKind, wrap: F) -> Self
    where
        F: FnOnce(Arc<dyn DocumentService>) -> Arc<dyn DocumentService> + Send + 'static,
    {
        Self {
            name: kind.as_str().to_string(),
            kind: Some(kind),
            wrap: Box::new(wrap),
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

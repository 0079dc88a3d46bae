//! Audit interception layer.

use std::sync::Arc;

use docward_core::{DocumentId, DocumentService, Lookup, User};

use crate::entry::AuditOperation;
use crate::log::AuditLog;

/// Records every call before delegating to the wrapped service.
///
/// Placed outermost so that denials and cache hits further in are still
/// recorded.
pub struct AuditLayer {
    inner: Arc<dyn DocumentService>,
    log: Arc<AuditLog>,
}

impl AuditLayer {
    /// Wrap `inner`, recording into `log`.
    #[must_use]
    pub fn new(inner: Arc<dyn DocumentService>, log: Arc<AuditLog>) -> Self {
        Self { inner, log }
    }

    /// The log this layer appends to.
    #[must_use]
    pub fn log(&self) -> &Arc<AuditLog> {
        &self.log
    }
}

impl DocumentService for AuditLayer {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        self.log.append(&user.username, AuditOperation::View, id);
        self.inner.view(id, user)
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        self.log.append(&user.username, AuditOperation::Edit, id);
        self.inner.update(id, content, user);
    }
}

impl std::fmt::Debug for AuditLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLayer")
            .field("entries", &self.log.len())
            .finish_non_exhaustive()
    }
}

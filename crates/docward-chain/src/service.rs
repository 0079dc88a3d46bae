//! Innermost service: straight delegation to the repository.

use std::sync::Arc;

use docward_core::{DocumentId, DocumentService, Lookup, User};
use docward_storage::DocumentRepository;
use tracing::trace;

/// Implements the document-access contract directly on a repository, with
/// no policy of its own.
pub struct CoreService {
    repository: Arc<dyn DocumentRepository>,
}

impl CoreService {
    /// Serve documents from `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }
}

impl DocumentService for CoreService {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        trace!(document_id = %id, username = %user.username, "core view");
        Lookup::from_option(self.repository.get(id))
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        trace!(document_id = %id, username = %user.username, "core update");
        self.repository.update(id, content);
    }
}

impl std::fmt::Debug for CoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docward_test::{RecordingRepository, test_employee};

    #[test]
    fn test_view_has_no_policy() {
        let repo = RecordingRepository::seeded();
        let core = CoreService::new(Arc::new(repo.clone()));

        // Level 5 document, clearance 2 caller: the core does not care.
        let lookup = core.view(&DocumentId::new("DOC-002"), &test_employee());
        assert!(lookup.is_found());
        assert_eq!(repo.total_gets(), 1);
    }

    #[test]
    fn test_missing_document() {
        let core = CoreService::new(Arc::new(RecordingRepository::seeded()));
        assert_eq!(
            core.view(&DocumentId::new("DOC-404"), &test_employee()),
            Lookup::NotFound
        );
    }

    #[test]
    fn test_update_writes_through() {
        let repo = RecordingRepository::seeded();
        let core = CoreService::new(Arc::new(repo.clone()));
        let id = DocumentId::new("DOC-001");

        core.update(&id, "restated", &test_employee());

        assert_eq!(repo.peek(&id).unwrap().content(), "restated");
    }

    #[test]
    fn test_update_of_missing_document_is_noop() {
        let repo = RecordingRepository::seeded();
        let core = CoreService::new(Arc::new(repo.clone()));

        core.update(&DocumentId::new("DOC-404"), "x", &test_employee());

        assert!(repo.peek(&DocumentId::new("DOC-404")).is_none());
    }
}

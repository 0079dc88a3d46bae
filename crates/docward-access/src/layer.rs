//! Access-control interception layer.

use std::sync::Arc;

use docward_core::{DocumentId, DocumentService, Lookup, User};
use tracing::{info, warn};

use crate::decision::{AccessDecision, check_access};

/// Enforces clearance on every call before it reaches the wrapped service.
///
/// An update is guarded by a `view` on the wrapped service, so each
/// permitted update costs two inner calls.
pub struct AccessControlLayer {
    inner: Arc<dyn DocumentService>,
}

impl AccessControlLayer {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn DocumentService>) -> Self {
        Self { inner }
    }

    fn authorize(&self, id: &DocumentId, user: &User) -> Lookup {
        let document = match self.inner.view(id, user) {
            Lookup::Found(document) => document,
            other => return other,
        };

        let decision = check_access(user, &document);
        match decision {
            AccessDecision::Granted => info!(
                document_id = %id,
                username = %user.username,
                clearance = %user.clearance,
                "access granted"
            ),
            AccessDecision::Denied {
                required,
                clearance,
            } => warn!(
                document_id = %id,
                username = %user.username,
                %clearance,
                %required,
                "access denied: insufficient clearance"
            ),
        }
        decision.into_lookup(document)
    }
}

impl DocumentService for AccessControlLayer {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        self.authorize(id, user)
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        if self.authorize(id, user).is_found() {
            self.inner.update(id, content, user);
        }
    }
}

impl std::fmt::Debug for AccessControlLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessControlLayer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docward_core::{ClearanceLevel, SecurityLevel};
    use docward_test::{RecordingService, ServiceCall, test_document, test_employee, test_manager};

    #[test]
    fn test_view_granted() {
        let inner = Arc::new(RecordingService::returning(test_document("DOC-2", 5)));
        let layer = AccessControlLayer::new(inner);

        let lookup = layer.view(&DocumentId::new("DOC-2"), &test_manager());
        assert!(lookup.is_found());
    }

    #[test]
    fn test_view_denied_carries_levels() {
        let inner = Arc::new(RecordingService::returning(test_document("DOC-2", 5)));
        let layer = AccessControlLayer::new(inner);

        let lookup = layer.view(&DocumentId::new("DOC-2"), &test_employee());
        assert_eq!(
            lookup,
            Lookup::Denied {
                required: SecurityLevel::new(5),
                clearance: ClearanceLevel::new(2),
            }
        );
        assert_eq!(lookup.into_document(), None);
    }

    #[test]
    fn test_view_not_found_passes_through() {
        let layer = AccessControlLayer::new(Arc::new(RecordingService::not_found()));
        assert_eq!(
            layer.view(&DocumentId::new("DOC-404"), &test_manager()),
            Lookup::NotFound
        );
    }

    #[test]
    fn test_inner_denial_is_propagated_unchanged() {
        let inner = Arc::new(RecordingService::denying());
        let layer = AccessControlLayer::new(inner);

        let lookup = layer.view(&DocumentId::new("DOC-2"), &test_manager());
        assert_eq!(
            lookup,
            Lookup::Denied {
                required: SecurityLevel::new(5),
                clearance: ClearanceLevel::new(0),
            }
        );
    }

    #[test]
    fn test_permitted_update_views_then_updates() {
        let inner = Arc::new(RecordingService::returning(test_document("DOC-1", 3)));
        let layer = AccessControlLayer::new(inner.clone());
        let id = DocumentId::new("DOC-1");

        layer.update(&id, "revised", &test_manager());

        assert_eq!(
            inner.calls(),
            vec![
                ServiceCall::View {
                    id: id.clone(),
                    username: "manager".to_string(),
                },
                ServiceCall::Update {
                    id,
                    content: "revised".to_string(),
                    username: "manager".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_denied_update_never_delegates() {
        let inner = Arc::new(RecordingService::returning(test_document("DOC-2", 5)));
        let layer = AccessControlLayer::new(inner.clone());

        layer.update(&DocumentId::new("DOC-2"), "leak", &test_employee());

        assert_eq!(inner.call_counts(), (1, 0));
    }

    #[test]
    fn test_update_of_missing_document_never_delegates() {
        let inner = Arc::new(RecordingService::not_found());
        let layer = AccessControlLayer::new(inner.clone());

        layer.update(&DocumentId::new("DOC-404"), "x", &test_manager());

        assert_eq!(inner.call_counts(), (1, 0));
    }
}

//! Clearance decisions.

use docward_core::{ClearanceLevel, Document, Lookup, SecurityLevel, User};
use serde::Serialize;

/// Outcome of comparing a user's clearance to a document's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Clearance meets or exceeds the level.
    Granted,
    /// Clearance is below the level.
    Denied {
        /// Level the document requires.
        required: SecurityLevel,
        /// Level the caller holds.
        clearance: ClearanceLevel,
    },
}

impl AccessDecision {
    /// Check if this decision allows access.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Turn the decision into a lookup result for `document`.
    #[must_use]
    pub fn into_lookup(self, document: Document) -> Lookup {
        match self {
            Self::Granted => Lookup::Found(document),
            Self::Denied {
                required,
                clearance,
            } => Lookup::Denied {
                required,
                clearance,
            },
        }
    }
}

/// Decide whether `user` may see `document`.
#[must_use]
pub fn check_access(user: &User, document: &Document) -> AccessDecision {
    if user.can_access(document) {
        AccessDecision::Granted
    } else {
        AccessDecision::Denied {
            required: document.security_level(),
            clearance: user.clearance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docward_test::{test_document, test_employee, test_manager, test_user};

    #[test]
    fn test_equal_levels_grant() {
        let doc = test_document("DOC-1", 5);
        assert!(check_access(&test_manager(), &doc).is_granted());
    }

    #[test]
    fn test_lower_clearance_denies() {
        let doc = test_document("DOC-2", 5);
        assert_eq!(
            check_access(&test_employee(), &doc),
            AccessDecision::Denied {
                required: SecurityLevel::new(5),
                clearance: ClearanceLevel::new(2),
            }
        );
    }

    #[test]
    fn test_zero_level_is_public() {
        let doc = test_document("DOC-0", 0);
        assert!(check_access(&test_user("guest", 0), &doc).is_granted());
    }

    #[test]
    fn test_into_lookup() {
        let doc = test_document("DOC-1", 3);
        assert!(AccessDecision::Granted.into_lookup(doc.clone()).is_found());
        assert!(check_access(&test_employee(), &doc).into_lookup(doc).is_denied());
    }
}

//! Test fixtures for common types.

use docward_core::{ClearanceLevel, Document, SecurityLevel, User};
use docward_storage::reference_catalogue;

/// The manager from the reference scenario (clearance 5).
#[must_use]
pub fn test_manager() -> User {
    User::new("manager", ClearanceLevel::new(5))
}

/// The employee from the reference scenario (clearance 2).
#[must_use]
pub fn test_employee() -> User {
    User::new("employee", ClearanceLevel::new(2))
}

/// Create a user with the given clearance.
#[must_use]
pub fn test_user(username: &str, clearance: u32) -> User {
    User::new(username, ClearanceLevel::new(clearance))
}

/// Create a document with placeholder title and content.
#[must_use]
pub fn test_document(id: &str, level: u32) -> Document {
    Document::new(
        id,
        format!("Test document {id}"),
        format!("Contents of {id}"),
        SecurityLevel::new(level),
    )
}

/// The reference catalogue (DOC-001 at 3, DOC-002 at 5, DOC-003 at 1).
#[must_use]
pub fn reference_documents() -> Vec<Document> {
    reference_catalogue()
}

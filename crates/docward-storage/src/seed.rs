//! Reference document catalogue.

use docward_core::{Document, SecurityLevel};

/// The three documents every freshly seeded store starts with.
#[must_use]
pub fn reference_catalogue() -> Vec<Document> {
    vec![
        Document::new(
            "DOC-001",
            "Q4 Financial Report",
            "Confidential content of the financial report... (10 MB)",
            SecurityLevel::new(3),
        ),
        Document::new(
            "DOC-002",
            "Market Strategy 2025",
            "Confidential strategic plans... (50 MB)",
            SecurityLevel::new(5),
        ),
        Document::new(
            "DOC-003",
            "Employee Handbook",
            "Policies and procedures... (2 MB)",
            SecurityLevel::new(1),
        ),
    ]
}

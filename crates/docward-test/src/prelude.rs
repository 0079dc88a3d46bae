//! Prelude module - commonly used test helpers.
//!
//! Use `use docward_test::prelude::*;` in test modules.

pub use crate::fixtures::{
    reference_documents, test_document, test_employee, test_manager, test_user,
};
pub use crate::harness::{setup_test_logging, test_config_file};
pub use crate::mocks::{RecordingRepository, RecordingService, RepositoryCall, ServiceCall};

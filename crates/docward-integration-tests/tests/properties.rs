//! Property tests for the reference chain.

#![allow(clippy::arithmetic_side_effects)]

use std::sync::Arc;

use docward_audit::AuditOperation;
use docward_cache::CacheConfig;
use docward_chain::ReferenceChain;
use docward_core::{DocumentId, DocumentService, Lookup};
use docward_test::{RecordingRepository, test_document, test_user};
use proptest::prelude::*;

const CATALOGUE: [&str; 3] = ["DOC-001", "DOC-002", "DOC-003"];

fn reference_chain(repo: &RecordingRepository) -> ReferenceChain {
    ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new())
}

/// Ids that are never in the seeded store.
fn arb_missing_id() -> impl Strategy<Value = String> {
    "[A-Z]{2,5}-[0-9]{4}".prop_filter("must not be seeded", |id| {
        !CATALOGUE.contains(&id.as_str())
    })
}

#[derive(Debug, Clone)]
enum Op {
    View { user: usize, doc: usize },
    Update { user: usize, doc: usize, content: String },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4_usize, 0..4_usize).prop_map(|(user, doc)| Op::View { user, doc }),
        (0..4_usize, 0..4_usize, "[a-z ]{0,12}")
            .prop_map(|(user, doc, content)| Op::Update { user, doc, content }),
    ]
}

proptest! {
    #[test]
    fn missing_documents_are_absent_for_everyone(
        id in arb_missing_id(),
        clearance in 0..10_u32,
        content in "[a-z]{1,10}",
    ) {
        let repo = RecordingRepository::seeded();
        let chain = reference_chain(&repo);
        let id = DocumentId::new(id);
        let user = test_user("anyone", clearance);

        prop_assert_eq!(chain.view(&id, &user), Lookup::NotFound);
        chain.update(&id, &content, &user);

        prop_assert_eq!(repo.update_count(&id), 0);
        prop_assert!(repo.peek(&id).is_none());
    }

    #[test]
    fn insufficient_clearance_sees_and_changes_nothing(
        level in 1..10_u32,
        shortfall in 1..10_u32,
        content in "[a-z]{1,10}",
    ) {
        let clearance = level.saturating_sub(shortfall);
        let repo = RecordingRepository::new([test_document("DOC-X", level)]);
        let chain = reference_chain(&repo);
        let id = DocumentId::new("DOC-X");
        let user = test_user("low", clearance);

        prop_assert!(chain.view(&id, &user).into_document().is_none());
        chain.update(&id, &content, &user);

        prop_assert_eq!(repo.update_count(&id), 0);
        prop_assert_eq!(repo.peek(&id), Some(test_document("DOC-X", level)));
    }

    #[test]
    fn repeated_views_read_the_store_once(
        level in 0..10_u32,
        extra in 0..5_u32,
        repeats in 2..6_usize,
    ) {
        let repo = RecordingRepository::new([test_document("DOC-X", level)]);
        let chain = reference_chain(&repo);
        let id = DocumentId::new("DOC-X");
        let user = test_user("cleared", level.saturating_add(extra));

        let first = chain.view(&id, &user);
        for _ in 1..repeats {
            prop_assert_eq!(&chain.view(&id, &user), &first);
        }
        prop_assert!(repo.get_count(&id) <= 1);
    }

    #[test]
    fn view_after_update_sees_new_content(
        level in 0..10_u32,
        extra in 0..5_u32,
        warm in any::<bool>(),
        content in "[a-zA-Z0-9 ]{0,24}",
    ) {
        let repo = RecordingRepository::new([test_document("DOC-X", level)]);
        let chain = reference_chain(&repo);
        let id = DocumentId::new("DOC-X");
        let user = test_user("editor", level.saturating_add(extra));

        if warm {
            chain.view(&id, &user);
        }
        chain.update(&id, &content, &user);

        let after = chain.view(&id, &user);
        prop_assert_eq!(after.document().map(|d| d.content()), Some(content.as_str()));
    }

    #[test]
    fn audit_log_mirrors_call_sequence(ops in prop::collection::vec(arb_op(), 0..24)) {
        let repo = RecordingRepository::seeded();
        let chain = reference_chain(&repo);
        let users: Vec<_> = (0..4_u32).map(|n| test_user(&format!("user-{n}"), n * 2)).collect();
        let docs = ["DOC-001", "DOC-002", "DOC-003", "DOC-404"].map(DocumentId::new);

        let mut expected = Vec::with_capacity(ops.len());
        for op in &ops {
            match op {
                Op::View { user, doc } => {
                    chain.view(&docs[*doc], &users[*user]);
                    expected.push((
                        users[*user].username.clone(),
                        AuditOperation::View,
                        docs[*doc].clone(),
                    ));
                }
                Op::Update { user, doc, content } => {
                    chain.update(&docs[*doc], content, &users[*user]);
                    expected.push((
                        users[*user].username.clone(),
                        AuditOperation::Edit,
                        docs[*doc].clone(),
                    ));
                }
            }
        }

        let recorded: Vec<_> = chain
            .audit_log()
            .entries()
            .into_iter()
            .map(|e| (e.username, e.operation, e.document_id))
            .collect();
        prop_assert_eq!(recorded, expected);
    }
}

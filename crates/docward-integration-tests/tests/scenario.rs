//! End-to-end walkthrough over the reference chain.
//!
//! `manager` (clearance 5) and `employee` (clearance 2) read the strategy
//! document (level 5) and the handbook (level 1) through
//! `audit -> access -> cache -> core`.

use std::collections::HashMap;
use std::sync::Arc;

use docward_audit::AuditOperation;
use docward_cache::CacheConfig;
use docward_chain::ReferenceChain;
use docward_config::loader::load_with_env;
use docward_core::{ClearanceLevel, DocumentId, DocumentService, Lookup, SecurityLevel};
use docward_test::{
    RecordingRepository, RepositoryCall, setup_test_logging, test_config_file, test_employee,
    test_manager,
};

fn doc(id: &str) -> DocumentId {
    DocumentId::new(id)
}

#[test]
fn test_walkthrough_scenario() {
    let repo = RecordingRepository::seeded();
    let chain = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let manager = test_manager();
    let employee = test_employee();
    let strategy = doc("DOC-002");
    let handbook = doc("DOC-003");

    // 1. Manager reads the strategy: granted, one repository read.
    let first = chain.view(&strategy, &manager);
    assert_eq!(
        first.document().map(|d| d.title()),
        Some("Market Strategy 2025")
    );
    assert_eq!(repo.get_count(&strategy), 1);
    assert_eq!(chain.audit_log().len(), 1);

    // 2. Employee is refused; the cached snapshot answers the level check.
    let second = chain.view(&strategy, &employee);
    assert_eq!(
        second,
        Lookup::Denied {
            required: SecurityLevel::new(5),
            clearance: ClearanceLevel::new(2),
        }
    );
    assert!(second.into_document().is_none());
    assert_eq!(repo.get_count(&strategy), 1);
    assert_eq!(chain.audit_log().len(), 2);

    // 3. Manager again: served from cache.
    let third = chain.view(&strategy, &manager);
    assert_eq!(third, first);
    assert_eq!(repo.get_count(&strategy), 1);
    assert_eq!(chain.audit_log().len(), 3);

    // 4. Employee reads the handbook.
    let fourth = chain.view(&handbook, &employee);
    assert_eq!(
        fourth.document().map(|d| d.title()),
        Some("Employee Handbook")
    );

    // 5. Four entries, in call order.
    let trail: Vec<(String, AuditOperation, String)> = chain
        .audit_log()
        .entries()
        .into_iter()
        .map(|e| (e.username, e.operation, e.document_id.to_string()))
        .collect();
    assert_eq!(
        trail,
        vec![
            ("manager".to_owned(), AuditOperation::View, "DOC-002".to_owned()),
            ("employee".to_owned(), AuditOperation::View, "DOC-002".to_owned()),
            ("manager".to_owned(), AuditOperation::View, "DOC-002".to_owned()),
            ("employee".to_owned(), AuditOperation::View, "DOC-003".to_owned()),
        ]
    );

    assert_eq!(
        repo.calls(),
        vec![RepositoryCall::Get(strategy), RepositoryCall::Get(handbook)]
    );

    let stats = chain.cache().stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.entries, 2);
}

#[test]
fn test_manager_update_is_visible_to_next_view() {
    let repo = RecordingRepository::seeded();
    let chain = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let manager = test_manager();
    let strategy = doc("DOC-002");

    assert!(chain.view(&strategy, &manager).is_found());
    chain.update(&strategy, "Pivot to EMEA", &manager);

    let after = chain.view(&strategy, &manager);
    assert_eq!(after.document().map(|d| d.content()), Some("Pivot to EMEA"));
    assert_eq!(
        repo.peek(&strategy).map(|d| d.content().to_owned()),
        Some("Pivot to EMEA".to_owned())
    );
    assert_eq!(repo.update_count(&strategy), 1);

    let ops: Vec<AuditOperation> = chain
        .audit_log()
        .entries()
        .iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(
        ops,
        vec![AuditOperation::View, AuditOperation::Edit, AuditOperation::View]
    );
}

#[test]
fn test_employee_update_never_reaches_repository() {
    let repo = RecordingRepository::seeded();
    let chain = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let strategy = doc("DOC-002");
    let before = repo.peek(&strategy);

    chain.update(&strategy, "leaked", &test_employee());

    assert_eq!(repo.update_count(&strategy), 0);
    assert_eq!(repo.peek(&strategy), before);
    assert_eq!(
        chain.audit_log().entries_for_operation(AuditOperation::Edit).len(),
        1
    );
}

#[test]
fn test_denied_update_keeps_cached_snapshot() {
    let repo = RecordingRepository::seeded();
    let chain = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let strategy = doc("DOC-002");

    let cached = chain.view(&strategy, &test_manager());
    assert!(cached.is_found());

    chain.update(&strategy, "leaked", &test_employee());

    // Access stops the write above the cache, so nothing is evicted and the
    // stored content is untouched.
    let stats = chain.cache().stats();
    assert_eq!(stats.invalidations, 0);
    assert_eq!(stats.entries, 1);
    assert_eq!(chain.cache().get(&strategy).as_ref(), cached.document());
    assert_eq!(repo.update_count(&strategy), 0);

    assert_eq!(chain.view(&strategy, &test_manager()), cached);
    assert_eq!(repo.get_count(&strategy), 1);
}

#[test]
fn test_scenario_from_configuration() {
    setup_test_logging("docward_config=debug,docward_chain=debug");
    let home = tempfile::tempdir().unwrap();
    let file = test_config_file(
        r#"
[repository]
lazy = false
seed_defaults = false

[chain]
layers = ["Audit", "access", "CACHE"]

[[documents]]
id = "DOC-002"
title = "Market Strategy 2025"
content = "Expand into two new regions."
security_level = 5

[[users]]
name = "intern"
clearance = 0
"#,
    );

    let no_env: HashMap<String, String> = HashMap::new();
    let resolved = load_with_env(Some(file.path()), Some(home.path()), &no_env).unwrap();
    let config = resolved.config;
    config.validate().unwrap();

    let documents = config.documents.iter().map(|entry| {
        docward_core::Document::new(
            entry.id.as_str(),
            entry.title.as_str(),
            entry.content.as_str(),
            SecurityLevel::new(entry.security_level),
        )
    });
    let repo = RecordingRepository::new(documents);
    let chain = ReferenceChain::from_names(
        Arc::new(repo.clone()),
        &config.chain.layers,
        config
            .cache
            .max_entries
            .map_or_else(CacheConfig::new, |max| CacheConfig::new().with_max_entries(max)),
    )
    .unwrap();

    let intern = config.user("intern").unwrap();
    let intern = docward_test::test_user(&intern.name, intern.clearance);

    assert!(chain.view(&doc("DOC-002"), &intern).is_denied());
    assert_eq!(chain.view(&doc("DOC-001"), &test_manager()), Lookup::NotFound);
    assert_eq!(chain.audit_log().len(), 2);
    assert_eq!(
        chain.audit_log().entries_for_user("intern")[0].description(),
        "intern attempted to view DOC-002"
    );
}

//! Layer ordering: what each position in the chain does to the others.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use docward_audit::{AuditLog, AuditOperation};
use docward_cache::{CacheConfig, DocumentCache};
use docward_chain::{
    ChainBuilder, ChainError, CoreService, Layer, LayerKind, ReferenceChain, cache_outside_access,
};
use docward_core::{DocumentId, DocumentService, Lookup, User};
use docward_test::{RecordingRepository, RepositoryCall, test_employee, test_manager};

fn chain_with(repo: &RecordingRepository, kinds: &[LayerKind]) -> ReferenceChain {
    ReferenceChain::with_layers(Arc::new(repo.clone()), kinds, CacheConfig::new()).unwrap()
}

fn strategy() -> DocumentId {
    DocumentId::new("DOC-002")
}

#[test]
fn test_reference_order() {
    let chain = ReferenceChain::new(Arc::new(RecordingRepository::seeded()), CacheConfig::new());
    assert_eq!(chain.kinds(), &LayerKind::REFERENCE_ORDER);
    assert!(!cache_outside_access(chain.kinds()));
}

#[test]
fn test_permitted_update_views_then_updates() {
    let repo = RecordingRepository::seeded();
    let chain = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let id = DocumentId::new("DOC-001");

    chain.update(&id, "restated", &test_manager());

    assert_eq!(
        repo.calls(),
        vec![
            RepositoryCall::Get(id.clone()),
            RepositoryCall::Update(id, "restated".to_owned()),
        ]
    );
}

#[test]
fn test_audit_beneath_access_sees_guarding_view() {
    let id = DocumentId::new("DOC-001");
    let manager = test_manager();
    let operations = |chain: &ReferenceChain| -> Vec<AuditOperation> {
        chain
            .audit_log()
            .entries()
            .iter()
            .map(|e| e.operation)
            .collect()
    };

    // Access checks a write with a view, which an inner audit layer records.
    let repo = RecordingRepository::seeded();
    let beneath = chain_with(&repo, &[LayerKind::Access, LayerKind::Audit, LayerKind::Cache]);
    beneath.update(&id, "restated", &manager);
    assert_eq!(
        operations(&beneath),
        vec![AuditOperation::View, AuditOperation::Edit]
    );
    assert_eq!(repo.update_count(&id), 1);

    // Outermost, audit sees the caller's single request.
    let reference =
        ReferenceChain::new(Arc::new(RecordingRepository::seeded()), CacheConfig::new());
    reference.update(&id, "restated", &manager);
    assert_eq!(operations(&reference), vec![AuditOperation::Edit]);

    // A refused write stops at access, so nothing below it is audited.
    let refused = chain_with(
        &RecordingRepository::seeded(),
        &[LayerKind::Access, LayerKind::Audit, LayerKind::Cache],
    );
    refused.update(&DocumentId::new("DOC-002"), "leaked", &test_employee());
    assert_eq!(operations(&refused), vec![AuditOperation::View]);
}

#[test]
fn test_cache_outside_access_leaks_to_low_clearance() {
    let repo = RecordingRepository::seeded();
    let chain = chain_with(&repo, &[LayerKind::Audit, LayerKind::Cache, LayerKind::Access]);
    assert!(cache_outside_access(chain.kinds()));

    assert!(chain.view(&strategy(), &test_manager()).is_found());
    let leaked = chain.view(&strategy(), &test_employee());

    // The snapshot cached for the manager is served without a clearance check.
    assert!(leaked.is_found());
    assert_eq!(repo.get_count(&strategy()), 1);
}

#[test]
fn test_cache_outside_access_still_guards_cold_reads() {
    let repo = RecordingRepository::seeded();
    let chain = chain_with(&repo, &[LayerKind::Cache, LayerKind::Access]);

    assert!(chain.view(&strategy(), &test_employee()).is_denied());
    assert!(chain.cache().is_empty());
}

#[test]
fn test_audit_inside_cache_misses_cache_hits() {
    let repo = RecordingRepository::seeded();
    let chain = chain_with(&repo, &[LayerKind::Access, LayerKind::Cache, LayerKind::Audit]);
    let manager = test_manager();

    chain.view(&strategy(), &manager);
    chain.view(&strategy(), &manager);

    assert_eq!(chain.audit_log().len(), 1);
    assert_eq!(chain.cache().stats().hits, 1);
}

#[test]
fn test_no_cache_reads_through_every_time() {
    let repo = RecordingRepository::seeded();
    let chain = chain_with(&repo, &[LayerKind::Audit, LayerKind::Access]);
    let manager = test_manager();

    for _ in 0..3 {
        assert!(chain.view(&strategy(), &manager).is_found());
    }
    assert_eq!(repo.get_count(&strategy()), 3);
    assert!(chain.cache().is_empty());
}

#[test]
fn test_bare_core_has_no_access_control() {
    let repo = RecordingRepository::seeded();
    let chain = chain_with(&repo, &[]);

    assert!(chain.view(&strategy(), &test_employee()).is_found());
    chain.update(&strategy(), "overwritten", &test_employee());
    assert_eq!(repo.update_count(&strategy()), 1);
    assert!(chain.audit_log().is_empty());
}

#[test]
fn test_audit_records_denied_and_missing_attempts() {
    let chain = ReferenceChain::new(Arc::new(RecordingRepository::seeded()), CacheConfig::new());
    let employee = test_employee();
    let missing = DocumentId::new("DOC-404");

    assert!(chain.view(&strategy(), &employee).is_denied());
    assert_eq!(chain.view(&missing, &employee), Lookup::NotFound);
    chain.update(&missing, "anything", &employee);

    let log = chain.audit_log();
    assert_eq!(log.entries_for_user("employee").len(), 3);
    assert_eq!(log.entries_for_document(&missing).len(), 2);
    assert_eq!(log.entries_for_operation(AuditOperation::Edit).len(), 1);
}

#[test]
fn test_from_names_rejects_bad_layers() {
    let repo = Arc::new(RecordingRepository::seeded());

    let unknown =
        ReferenceChain::from_names(repo.clone(), &["audit", "metrics"], CacheConfig::new());
    assert!(matches!(unknown, Err(ChainError::UnknownLayer { name }) if name == "metrics"));

    let duplicate = ReferenceChain::from_names(repo, &["cache", "Cache"], CacheConfig::new());
    assert_eq!(
        duplicate.err(),
        Some(ChainError::DuplicateLayer {
            kind: LayerKind::Cache
        })
    );
}

/// Counts calls passing through it.
struct Counting {
    inner: Arc<dyn DocumentService>,
    views: Arc<AtomicUsize>,
}

impl DocumentService for Counting {
    fn view(&self, id: &DocumentId, user: &User) -> Lookup {
        self.views.fetch_add(1, Ordering::SeqCst);
        self.inner.view(id, user)
    }

    fn update(&self, id: &DocumentId, content: &str, user: &User) {
        self.inner.update(id, content, user);
    }
}

#[test]
fn test_custom_layer_between_builtins() {
    let repo = RecordingRepository::seeded();
    let log = Arc::new(AuditLog::new());
    let cache = Arc::new(DocumentCache::default());
    let views = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&views);

    let service = ChainBuilder::new(Arc::new(CoreService::new(Arc::new(repo.clone()))))
        .layer(Layer::audit(Arc::clone(&log)))
        .layer(Layer::access())
        .layer(Layer::custom("counting", move |inner| {
            Arc::new(Counting {
                inner,
                views: counted,
            })
        }))
        .layer(Layer::cache(Arc::clone(&cache)))
        .build();

    let manager = test_manager();
    service.view(&strategy(), &manager);
    service.view(&strategy(), &manager);

    // The counter sits above the cache, so it sees both views.
    assert_eq!(views.load(Ordering::SeqCst), 2);
    assert_eq!(repo.get_count(&strategy()), 1);
    assert_eq!(log.len(), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_chains_share_only_the_repository() {
    let repo = RecordingRepository::seeded();
    let first = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let second = ReferenceChain::new(Arc::new(repo.clone()), CacheConfig::new());
    let manager = test_manager();

    first.view(&strategy(), &manager);
    second.update(&strategy(), "from the second chain", &manager);

    assert_eq!(first.audit_log().len(), 1);
    assert_eq!(second.audit_log().len(), 1);
    // The first chain's cache was never told about the write.
    let stale = first.view(&strategy(), &manager);
    assert_eq!(
        stale.document().map(|d| d.content()),
        Some("Confidential strategic plans... (50 MB)")
    );
    assert_eq!(
        repo.peek(&strategy()).map(|d| d.content().to_owned()),
        Some("from the second chain".to_owned())
    );
}

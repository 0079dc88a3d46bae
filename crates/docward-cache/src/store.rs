//! Shared snapshot store.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use docward_core::{Document, DocumentId};
use serde::Serialize;
use tracing::debug;

use crate::config::CacheConfig;

/// Invalidation epoch observed before a miss is served.
///
/// Obtained from [`DocumentCache::generation`] and handed back to
/// [`DocumentCache::insert`]; the insert is dropped if any invalidation
/// happened in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Views answered from the store.
    pub hits: u64,
    /// Views that had to be delegated.
    pub misses: u64,
    /// Invalidations requested (one per update).
    pub invalidations: u64,
    /// Snapshots dropped to respect the bound.
    pub evictions: u64,
    /// Snapshots currently held.
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of views answered from the store (0.0 to 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits.saturating_add(self.misses);
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
struct Slots {
    documents: HashMap<DocumentId, Document>,
    /// Insertion order, oldest first.
    order: VecDeque<DocumentId>,
    epoch: u64,
}

impl Slots {
    fn remove(&mut self, id: &DocumentId) -> bool {
        if self.documents.remove(id).is_some() {
            self.order.retain(|queued| queued != id);
            true
        } else {
            false
        }
    }
}

/// Id-keyed store of document snapshots.
///
/// One instance backs one [`CachingLayer`](crate::CachingLayer); hand the
/// same `Arc` to the layer and to whoever needs statistics.
#[derive(Debug, Default)]
pub struct DocumentCache {
    config: CacheConfig,
    slots: Mutex<Slots>,
    hits: AtomicU64,
    misses: AtomicU64,
    invalidations: AtomicU64,
    evictions: AtomicU64,
}

impl DocumentCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this cache was built with.
    #[must_use]
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Look up a snapshot, counting a hit or a miss.
    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<Document> {
        let found = self.slots().documents.get(id).cloned();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Current invalidation epoch. Take this before delegating a miss.
    #[must_use]
    pub fn generation(&self) -> Generation {
        Generation(self.slots().epoch)
    }

    /// Store a snapshot fetched under `seen`.
    ///
    /// Returns `false` without storing if an invalidation happened since
    /// `seen` was taken, or if the bound is zero.
    pub fn insert(&self, document: Document, seen: Generation) -> bool {
        let mut slots = self.slots();
        if slots.epoch != seen.0 {
            debug!(document_id = %document.id(), "discarding snapshot fetched before invalidation");
            return false;
        }

        let id = document.id().clone();
        if slots.documents.contains_key(&id) {
            slots.documents.insert(id, document);
            return true;
        }

        if let Some(max) = self.config.max_entries {
            if max == 0 {
                return false;
            }
            while slots.documents.len() >= max {
                let Some(oldest) = slots.order.pop_front() else {
                    break;
                };
                slots.documents.remove(&oldest);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(document_id = %oldest, "evicted cached document");
            }
        }

        debug!(document_id = %id, "cached document");
        slots.order.push_back(id.clone());
        slots.documents.insert(id, document);
        true
    }

    /// Drop the snapshot for `id` and advance the epoch.
    ///
    /// Returns whether a snapshot was held.
    pub fn invalidate(&self, id: &DocumentId) -> bool {
        let mut slots = self.slots();
        slots.epoch = slots.epoch.wrapping_add(1);
        let removed = slots.remove(id);
        self.invalidations.fetch_add(1, Ordering::Relaxed);
        debug!(document_id = %id, removed, "invalidated cache entry");
        removed
    }

    /// Drop every snapshot.
    pub fn clear(&self) {
        let mut slots = self.slots();
        slots.epoch = slots.epoch.wrapping_add(1);
        slots.documents.clear();
        slots.order.clear();
    }

    /// Whether a snapshot for `id` is held. Does not count as a hit or miss.
    #[must_use]
    pub fn contains(&self, id: &DocumentId) -> bool {
        self.slots().documents.contains_key(id)
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots().documents.len()
    }

    /// Whether no snapshots are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

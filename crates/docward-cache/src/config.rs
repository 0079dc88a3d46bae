//! Cache configuration.

/// Configuration for a [`DocumentCache`](crate::DocumentCache).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of snapshots held. `None` means unbounded.
    ///
    /// When full, the oldest-inserted snapshot is evicted.
    pub max_entries: Option<usize>,
}

impl CacheConfig {
    /// Create a new cache config with default values (unbounded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the cache to `max` snapshots. A bound of zero disables storing.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Remove any bound.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_entries = None;
        self
    }
}

//! In-memory LRU cache for computed statistics.
//!
//! Statistics are pure functions of a dataset snapshot, so entries never go
//! stale while the snapshot is alive. A cache belongs to one snapshot; build
//! a fresh one (or call [`StatsCache::clear`]) when the data changes.

use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use lru::LruCache;

use crate::cli::types::PlayerId;
use crate::stats::{CalculatedStats, StatsFilter};

/// Entries kept by [`StatsCache::default`].
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Cache key: one player under one filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsCacheKey {
    pub player_id: PlayerId,
    pub filter: StatsFilter,
}

impl StatsCacheKey {
    pub fn new(player_id: PlayerId, filter: &StatsFilter) -> Self {
        Self {
            player_id,
            filter: filter.clone(),
        }
    }
}

/// Thread-safe memo of `CalculatedStats` keyed by `(player, filter)`.
pub struct StatsCache {
    memory_cache: Mutex<LruCache<StatsCacheKey, Arc<CalculatedStats>>>,
    memory_capacity: usize,
}

impl StatsCache {
    /// A capacity of zero is bumped to one.
    pub fn new(memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
        }
    }

    pub fn get(&self, key: &StatsCacheKey) -> Option<Arc<CalculatedStats>> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: StatsCacheKey, value: Arc<CalculatedStats>) {
        self.lock().put(key, value);
    }

    /// Return the cached value or compute, store and return it.
    ///
    /// The lock is not held while `compute` runs, so two threads racing on
    /// the same key may both compute; the results are identical.
    pub fn get_or_insert_with<F>(&self, key: StatsCacheKey, compute: F) -> Arc<CalculatedStats>
    where
        F: FnOnce() -> CalculatedStats,
    {
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        let value = Arc::new(compute());
        self.put(key, Arc::clone(&value));
        value
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// `(entries, capacity)`
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.lock().len(), self.memory_capacity)
    }

    // Entries are immutable values, so a poisoned lock still guards a usable cache.
    fn lock(&self) -> MutexGuard<'_, LruCache<StatsCacheKey, Arc<CalculatedStats>>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

//! Read-through memo cache shared by the orthant catalog and point helpers.
//!
//! Entries are append-only: once a key holds a value it is never replaced or
//! evicted. Growth is bounded by the callers' key space (dimension counts up
//! to `cfg::MAX_DIMS`).

use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;

/// Concurrent compute-if-absent map. Values are cloned out on every read.
pub struct MemoCache<K, V> {
    map: DashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.map.get(key).map(|v| v.value().clone())
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `f` runs under the key's shard lock, so keep it cheap. Expensive
    /// fills compute first and go through [`MemoCache::insert_if_absent`].
    pub fn get_or_insert_with<F: FnOnce() -> V>(&self, key: K, f: F) -> V {
        if let Some(v) = self.get(&key) {
            return v;
        }
        self.map.entry(key).or_insert_with(f).value().clone()
    }

    /// Store `value` unless `key` is already present; returns the stored value.
    pub fn insert_if_absent(&self, key: K, value: V) -> V {
        self.map.entry(key).or_insert(value).value().clone()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn computes_once_then_reuses() {
        let cache: MemoCache<usize, usize> = MemoCache::new();
        let calls = AtomicUsize::new(0);
        let a = cache.get_or_insert_with(3, || {
            calls.fetch_add(1, Ordering::SeqCst);
            8
        });
        let b = cache.get_or_insert_with(3, || {
            calls.fetch_add(1, Ordering::SeqCst);
            99
        });
        assert_eq!((a, b), (8, 8));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_if_absent_never_overwrites() {
        let cache: MemoCache<(usize, usize), &str> = MemoCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.insert_if_absent((2, 1), "first"), "first");
        assert_eq!(cache.insert_if_absent((2, 1), "second"), "first");
        assert_eq!(cache.get(&(2, 1)), Some("first"));
        assert!(cache.contains_key(&(2, 1)));
        assert_eq!(cache.get(&(2, 2)), None);
    }
}

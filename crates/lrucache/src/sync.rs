//! Lock-guarded cache for shared use

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::config::CacheConfig;
use crate::error::{Error, Result};
use crate::stats::StatsSnapshot;

/// An [`LruCache`] behind a single exclusive lock.
///
/// Every call holds the lock for its whole duration. Lookups reorder the
/// recency list, so there is no read-only path that could take a shared lock.
/// Wrap in an `Arc` to share between threads.
pub struct SharedCache<K, V> {
    inner: Mutex<LruCache<K, V>>,
    capacity: usize,
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new SharedCache with the given capacity
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Create a new SharedCache from a config
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        let cache = LruCache::with_config(config)?;
        let capacity = cache.capacity();

        Ok(Self {
            inner: Mutex::new(cache),
            capacity,
        })
    }

    /// Get a copy of a value, marking it most recently used
    ///
    /// # Returns
    /// * `Err(Error::NotFound)` - key is not cached
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned().ok_or(Error::NotFound)
    }

    /// Insert or update a key, returning the evicted entry if any
    pub fn set(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().set(key, value)
    }

    /// Remove a key, returning whether it was cached
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().delete(key)
    }

    /// Run several operations under one lock acquisition
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut LruCache<K, V>) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Get current cache size
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        let mut cache = self.inner.lock();
        cache.clear();
        cache.stats().reset();
    }

    /// Get cache statistics
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let cache = SharedCache::new(10).unwrap();

        cache.set("key".to_string(), b"test data".to_vec());
        let data = cache.get("key").unwrap();

        assert_eq!(data, b"test data");
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_shared_not_found() {
        let cache: SharedCache<String, u32> = SharedCache::new(10).unwrap();

        assert_eq!(cache.get("missing"), Err(Error::NotFound));
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_shared_invalid_capacity() {
        let result = SharedCache::<u64, u64>::new(0);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_shared_eviction() {
        let cache = SharedCache::new(2).unwrap();

        cache.set(0u64, "data 0");
        cache.set(1u64, "data 1");
        assert_eq!(cache.size(), 2);

        // 0 is least recently used
        assert_eq!(cache.set(2u64, "data 2"), Some((0, "data 0")));
        assert_eq!(cache.size(), 2);

        assert!(cache.get(&1).is_ok());
        assert!(cache.get(&2).is_ok());
        assert_eq!(cache.get(&0), Err(Error::NotFound));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_shared_delete_and_clear() {
        let cache = SharedCache::new(10).unwrap();

        cache.set(1u64, 10u64);
        cache.set(2u64, 20u64);

        assert!(cache.delete(&1));
        assert!(!cache.delete(&1));
        assert_eq!(cache.size(), 1);

        cache.get(&2).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 10);
        assert_eq!(cache.stats(), StatsSnapshot::default());
    }

    #[test]
    fn test_shared_with_lock_compound() {
        let cache = SharedCache::new(4).unwrap();

        cache.set("counter", 0u64);
        cache.with_lock(|inner| {
            if let Some(value) = inner.get_mut("counter") {
                *value += 1;
            }
        });

        assert_eq!(cache.get("counter").unwrap(), 1);
    }

    #[test]
    fn test_shared_concurrent_access() {
        let cache = Arc::new(SharedCache::new(64).unwrap());

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..1000u64 {
                        let key = (t * 1000 + i) % 200;
                        cache.set(key, key * 2);
                        if let Ok(value) = cache.get(&key) {
                            assert_eq!(value, key * 2);
                        }
                        cache.with_lock(|inner| assert!(inner.len() <= inner.capacity()));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.size(), 64);
        cache.with_lock(|inner| inner.check_invariants());
    }
}

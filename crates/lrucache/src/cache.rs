//! LRU cache facade
//!
//! Composes the key index, the recency list and the slot arena. The index resolves a
//! key to its arena id, the order list repositions that id, and eviction pops
//! the list tail; every step is O(1).

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::arena::Arena;
use crate::config::CacheConfig;
use crate::entry::EntryId;
use crate::error::Result;
use crate::index::Index;
use crate::iter::Iter;
use crate::order::OrderList;
use crate::stats::CacheStats;

/// Upper bound on slots reserved at construction; larger caches grow on demand
const MAX_PREALLOCATED: usize = 1024;

/// Fixed-capacity cache evicting the least recently used entry.
///
/// Both [`get`](Self::get) and [`set`](Self::set) mark the key as most
/// recently used. Inserting a new key into a full cache evicts exactly one
/// entry, the least recently used one.
///
/// Not thread-safe on its own; see [`SharedCache`](crate::SharedCache).
pub struct LruCache<K, V> {
    arena: Arena<K, V>,
    index: Index<K>,
    order: OrderList,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache holding at most `capacity` entries
    ///
    /// # Returns
    /// * `Err(Error::InvalidConfiguration)` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Create an empty cache from a validated config
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let capacity = config.capacity;
        debug!(capacity, "creating LRU cache");

        let reserved = capacity.min(MAX_PREALLOCATED);
        Ok(Self {
            arena: Arena::with_capacity(reserved),
            index: Index::with_capacity(reserved),
            order: OrderList::new(),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Look up a value and mark it most recently used.
    ///
    /// `None` means the key is not cached; nothing is modified in that case.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.touch(key)?;
        Some(&self.arena.get(id).value)
    }

    /// Like [`get`](Self::get), with mutable access to the value
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.touch(key)?;
        Some(&mut self.arena.get_mut(id).value)
    }

    /// Look up a value without touching recency or statistics
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .lookup(key)
            .map(|id| &self.arena.get(id).value)
    }

    /// Check for a key without touching recency or statistics
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.lookup(key).is_some()
    }

    /// Insert or update a key, making it the most recently used.
    ///
    /// An existing key keeps its slot and only has its value replaced, so the
    /// size does not change. A new key in a full cache first evicts the least
    /// recently used entry, which is returned.
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(id) = self.index.lookup(&key) {
            self.arena.set_value(id, value);
            self.order.move_to_front(&mut self.arena, id);
            return None;
        }

        let evicted = if self.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        let id = self.arena.allocate(key.clone(), value);
        self.index.insert(key, id);
        self.order.push_front(&mut self.arena, id);
        self.stats.record_insert();

        evicted
    }

    /// Remove a key, returning its value if it was cached
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.index.remove(key)?;
        self.order.remove(&mut self.arena, id);
        Some(self.arena.free(id).value)
    }

    /// Remove a key, returning whether it was cached
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let id = self.order.pop_back(&mut self.arena)?;
        let entry = self.arena.free(id);
        self.index.remove(&entry.key);
        Some(entry.into_pair())
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        debug!(dropped = self.len(), "clearing LRU cache");
        self.arena.clear();
        self.index.clear();
        self.order.clear();
    }

    fn touch<Q>(&mut self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.lookup(key) {
            Some(id) => {
                self.order.move_to_front(&mut self.arena, id);
                self.stats.record_hit();
                Some(id)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let evicted = self.pop_lru()?;
        self.stats.record_eviction();
        trace!(capacity = self.capacity, "evicted least recently used entry");
        Some(evicted)
    }
}

impl<K, V> LruCache<K, V> {
    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Same as [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The next eviction candidate, without touching recency
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.tail().map(|id| self.pair(id))
    }

    /// The most recently used entry, without touching recency
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.order.head().map(|id| self.pair(id))
    }

    /// Entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.order.ids(&self.arena), &self.arena)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn pair(&self, id: EntryId) -> (&K, &V) {
        let entry = self.arena.get(id);
        (&entry.key, &entry.value)
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a LruCache<K, V>);

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for DebugEntries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Panic unless index, arena and order list describe the same entries
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        let len = self.len();
        assert!(len <= self.capacity, "size {} over capacity {}", len, self.capacity);
        assert_eq!(self.index.len(), len, "index and arena disagree on size");
        assert_eq!(self.order.len(), len, "order list and arena disagree on size");

        let forward: Vec<EntryId> = self.order.ids(&self.arena).collect();
        assert_eq!(forward.len(), len, "forward walk is short");

        let mut seen = HashSet::new();
        for &id in &forward {
            assert!(self.arena.is_active(id), "order list holds freed slot {}", id);
            assert!(seen.insert(id), "slot {} linked twice", id);
            let entry = self.arena.get(id);
            assert_eq!(self.index.lookup(&entry.key), Some(id), "index does not map back to {}", id);
        }

        let mut backward = Vec::with_capacity(len);
        let mut cursor = self.order.tail();
        while let Some(id) = cursor {
            assert!(backward.len() < len, "backward walk does not terminate");
            backward.push(id);
            cursor = self.arena.get(id).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward, "prev links do not mirror next links");

        if let Some(head) = self.order.head() {
            assert!(self.arena.get(head).prev.is_none(), "head has a predecessor");
        }
        if let Some(tail) = self.order.tail() {
            assert!(self.arena.get(tail).next.is_none(), "tail has a successor");
        }
    }
}

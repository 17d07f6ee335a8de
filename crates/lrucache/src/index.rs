//! Key → arena id lookup

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::entry::EntryId;

/// Direct-access map from keys to the slot holding their entry
pub(crate) struct Index<K> {
    map: HashMap<K, EntryId, RandomState>,
}

impl<K: Hash + Eq> Index<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn lookup<Q>(&self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).copied()
    }

    /// Map `key` to `id`, returning the id it replaced
    pub(crate) fn insert(&mut self, key: K, id: EntryId) -> Option<EntryId> {
        self.map.insert(key, id)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_insert_lookup_remove() {
        let mut index: Index<String> = Index::with_capacity(4);

        assert_eq!(index.insert("dog".to_string(), EntryId::new(0)), None);
        assert_eq!(index.insert("cat".to_string(), EntryId::new(1)), None);
        assert_eq!(index.len(), 2);

        // Borrowed lookup
        assert_eq!(index.lookup("dog"), Some(EntryId::new(0)));
        assert_eq!(index.lookup("frog"), None);

        assert_eq!(index.remove("dog"), Some(EntryId::new(0)));
        assert_eq!(index.remove("dog"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_insert_replaces() {
        let mut index = Index::with_capacity(1);

        index.insert(1u64, EntryId::new(0));
        assert_eq!(index.insert(1u64, EntryId::new(5)), Some(EntryId::new(0)));
        assert_eq!(index.lookup(&1), Some(EntryId::new(5)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_clear() {
        let mut index = Index::with_capacity(2);

        index.insert(1u64, EntryId::new(0));
        index.insert(2u64, EntryId::new(1));
        index.clear();

        assert_eq!(index.len(), 0);
        assert_eq!(index.lookup(&1), None);
    }
}

//! Borrowing iteration over cache entries

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::order::Ids;

/// Iterator over `(&K, &V)` from most to least recently used.
///
/// Created by [`LruCache::iter`](crate::LruCache::iter). Iterating does not
/// change the recency order.
pub struct Iter<'a, K, V> {
    ids: Ids<'a, K, V>,
    arena: &'a Arena<K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(ids: Ids<'a, K, V>, arena: &'a Arena<K, V>) -> Self {
        Self { ids, arena }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena: &'a Arena<K, V> = self.arena;
        let entry = arena.get(self.ids.next()?);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

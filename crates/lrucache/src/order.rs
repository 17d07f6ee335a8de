//! Recency order over arena ids
//!
//! An intrusive doubly-linked list: the `prev`/`next` links live in the
//! entries themselves, the list only tracks its endpoints. Head is the
//! most-recently-used entry, tail the least-recently-used one.

use crate::arena::Arena;
use crate::entry::EntryId;

/// Doubly-linked recency order, MRU at the head
#[derive(Debug, Default)]
pub(crate) struct OrderList {
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl OrderList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Most-recently-used id
    pub(crate) fn head(&self) -> Option<EntryId> {
        self.head
    }

    /// Least-recently-used id, the next eviction candidate
    pub(crate) fn tail(&self) -> Option<EntryId> {
        self.tail
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link an unlinked id in as the new head
    pub(crate) fn push_front<K, V>(&mut self, arena: &mut Arena<K, V>, id: EntryId) {
        let old_head = self.head;
        {
            let entry = arena.get_mut(id);
            entry.prev = None;
            entry.next = old_head;
        }

        match old_head {
            Some(head_id) => arena.get_mut(head_id).prev = Some(id),
            None => self.tail = Some(id),
        }

        self.head = Some(id);
        self.len += 1;
    }

    /// Unlink `id` from wherever it sits, patching its neighbours
    pub(crate) fn remove<K, V>(&mut self, arena: &mut Arena<K, V>, id: EntryId) {
        let (prev, next) = {
            let entry = arena.get_mut(id);
            (entry.prev.take(), entry.next.take())
        };

        match prev {
            Some(prev_id) => arena.get_mut(prev_id).next = next,
            None => self.head = next,
        }

        match next {
            Some(next_id) => arena.get_mut(next_id).prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
    }

    /// Promote `id` to most-recently-used
    pub(crate) fn move_to_front<K, V>(&mut self, arena: &mut Arena<K, V>, id: EntryId) {
        if self.head == Some(id) {
            return;
        }

        self.remove(arena, id);
        self.push_front(arena, id);
    }

    /// Unlink and return the least-recently-used id
    pub(crate) fn pop_back<K, V>(&mut self, arena: &mut Arena<K, V>) -> Option<EntryId> {
        let tail = self.tail?;
        self.remove(arena, tail);
        Some(tail)
    }

    /// Forget both endpoints. Only valid together with clearing the arena.
    pub(crate) fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Walk ids from head to tail
    pub(crate) fn ids<'a, K, V>(&self, arena: &'a Arena<K, V>) -> Ids<'a, K, V> {
        Ids {
            arena,
            next: self.head,
            remaining: self.len,
        }
    }
}

/// Iterator over ids in MRU → LRU order
pub(crate) struct Ids<'a, K, V> {
    arena: &'a Arena<K, V>,
    next: Option<EntryId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Ids<'a, K, V> {
    type Item = EntryId;

    fn next(&mut self) -> Option<EntryId> {
        // Bounded by `remaining` so a corrupted chain cannot loop forever
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        self.next = self.arena.get(id).next;
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

//! Slot arena owning every cache entry
//!
//! Freed slots go on a free list and are handed out again before the slot
//! vector grows, so allocation and release are both O(1).

use crate::entry::{Entry, EntryId};

/// Owning storage for entries, addressed by [`EntryId`]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free_list: Vec<usize>,
    active: usize,
}

impl<K, V> Arena<K, V> {
    /// Create an arena with room for `capacity` entries before reallocating
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            active: 0,
        }
    }

    /// Store a new unlinked entry and return its id
    pub(crate) fn allocate(&mut self, key: K, value: V) -> EntryId {
        let entry = Entry::new(key, value);
        let slot = match self.free_list.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.active += 1;
        EntryId::new(slot)
    }

    /// Release a slot and hand back the entry it held.
    ///
    /// Panics if the slot is not active.
    pub(crate) fn free(&mut self, id: EntryId) -> Entry<K, V> {
        let entry = match self.slots.get_mut(id.slot()).and_then(Option::take) {
            Some(entry) => entry,
            None => panic!("arena: free of inactive slot {}", id),
        };
        self.free_list.push(id.slot());
        self.active -= 1;
        entry
    }

    /// Panics if the slot is not active.
    pub(crate) fn get(&self, id: EntryId) -> &Entry<K, V> {
        match self.slots.get(id.slot()) {
            Some(Some(entry)) => entry,
            _ => panic!("arena: read of inactive slot {}", id),
        }
    }

    /// Panics if the slot is not active.
    pub(crate) fn get_mut(&mut self, id: EntryId) -> &mut Entry<K, V> {
        match self.slots.get_mut(id.slot()) {
            Some(Some(entry)) => entry,
            _ => panic!("arena: write to inactive slot {}", id),
        }
    }

    /// Replace the value stored at `id`, returning the old one
    pub(crate) fn set_value(&mut self, id: EntryId, value: V) -> V {
        std::mem::replace(&mut self.get_mut(id).value, value)
    }

    /// Number of active slots
    pub(crate) fn len(&self) -> usize {
        self.active
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.active == 0
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self, id: EntryId) -> bool {
        matches!(self.slots.get(id.slot()), Some(Some(_)))
    }

    /// Drop every entry; previously issued ids become invalid
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.active = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_allocate_and_get() {
        let mut arena = Arena::with_capacity(2);

        let a = arena.allocate("a", 1);
        let b = arena.allocate("b", 2);

        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).key, "a");
        assert_eq!(arena.get(b).value, 2);
    }

    #[test]
    fn test_arena_reuses_freed_slot() {
        let mut arena = Arena::with_capacity(2);

        let a = arena.allocate("a", 1);
        arena.allocate("b", 2);

        let entry = arena.free(a);
        assert_eq!(entry.into_pair(), ("a", 1));
        assert!(!arena.is_active(a));
        assert_eq!(arena.len(), 1);

        let c = arena.allocate("c", 3);
        assert_eq!(c, a);
        assert_eq!(arena.get(c).key, "c");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_arena_set_value() {
        let mut arena = Arena::with_capacity(1);

        let a = arena.allocate("a", 1);
        assert_eq!(arena.set_value(a, 10), 1);
        assert_eq!(arena.get(a).value, 10);
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = Arena::with_capacity(2);

        let a = arena.allocate("a", 1);
        arena.clear();

        assert!(arena.is_empty());
        assert!(!arena.is_active(a));
    }

    #[test]
    #[should_panic(expected = "inactive slot")]
    fn test_arena_double_free_panics() {
        let mut arena = Arena::with_capacity(1);

        let a = arena.allocate("a", 1);
        arena.free(a);
        arena.free(a);
    }

    #[test]
    #[should_panic(expected = "inactive slot")]
    fn test_arena_read_after_free_panics() {
        let mut arena = Arena::with_capacity(1);

        let a = arena.allocate("a", 1);
        arena.free(a);
        let _ = arena.get(a);
    }
}

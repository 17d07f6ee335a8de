//! Cache entries and their arena identifiers

use std::fmt;

/// Stable identifier of an arena slot.
///
/// Ids are only meaningful for the arena that issued them and may be reused
/// once the slot is freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(usize);

impl EntryId {
    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Slot position inside the arena
    pub(crate) fn slot(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One cached key/value pair plus its links in the recency order
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Neighbour closer to the most-recently-used end
    pub(crate) prev: Option<EntryId>,
    /// Neighbour closer to the least-recently-used end
    pub(crate) next: Option<EntryId>,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Consume the entry, keeping only the pair
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_unlinked() {
        let entry = Entry::new("dog", 100);
        assert!(entry.prev.is_none());
        assert!(entry.next.is_none());
        assert_eq!(entry.into_pair(), ("dog", 100));
    }

    #[test]
    fn test_entry_id_display() {
        assert_eq!(EntryId::new(7).to_string(), "#7");
        assert_eq!(EntryId::new(7).slot(), 7);
    }
}

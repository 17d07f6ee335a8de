//! # lrucache
//!
//! Fixed-capacity key-value cache evicting the least recently used entry.
//!
//! ## Architecture
//! - **Arena**: owns every entry in slots addressed by stable ids, with a
//!   free list for O(1) reuse
//! - **Order list**: intrusive doubly-linked recency order over those ids
//!   (head = most recently used, tail = next to evict)
//! - **Index**: AHash map from key to slot id (O(1))
//! - **LruCache**: composes the three; `get`, `set` and eviction are O(1)
//! - **SharedCache**: the same cache behind one exclusive lock
//!
//! ```
//! use lrucache::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.set("dog", 100);
//! cache.set("cat", 10);
//! cache.get("dog");
//!
//! // "cat" is now least recently used
//! assert_eq!(cache.set("frog", 30), Some(("cat", 10)));
//! ```

#![warn(missing_docs)]

mod arena;
mod cache;
mod config;
mod entry;
mod error;
mod index;
mod iter;
mod order;
mod stats;
mod sync;


pub use cache::LruCache;
pub use config::{CacheConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use iter::Iter;
pub use stats::{CacheStats, StatsSnapshot};
pub use sync::SharedCache;

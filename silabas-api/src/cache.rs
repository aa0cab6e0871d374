//! Bounded least-recently-used memo
//!
//! Reads promote the entry; inserting into a full memo evicts the least
//! recently used entry. A capacity of 0 turns every operation into a no-op.

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Thread-safe LRU memo shared by a processor
#[derive(Debug)]
pub struct MemoCache<K: Hash + Eq, V: Clone> {
    entries: Option<Mutex<LruCache<K, V>>>,
    capacity: usize,
}

impl<K: Hash + Eq, V: Clone> MemoCache<K, V> {
    /// Memo holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        let entries = NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap)));
        Self { entries, capacity }
    }

    /// Look up and promote `key`
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.as_ref()?;
        if let Ok(mut cache) = entries.lock() {
            return cache.get(key).cloned();
        }
        None
    }

    /// Insert or replace `key`
    pub fn put(&self, key: K, value: V) {
        if let Some(entries) = &self.entries {
            if let Ok(mut cache) = entries.lock() {
                cache.put(key, value);
            }
        }
    }

    /// Whether `key` is present, without promoting it
    pub fn contains(&self, key: &K) -> bool {
        self.entries
            .as_ref()
            .and_then(|entries| entries.lock().ok().map(|cache| cache.contains(key)))
            .unwrap_or(false)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries
            .as_ref()
            .and_then(|entries| entries.lock().ok().map(|cache| cache.len()))
            .unwrap_or(0)
    }

    /// True when nothing is memoized
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            if let Ok(mut cache) = entries.lock() {
                cache.clear();
            }
        }
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// Caches for Fermi break-up split lists
//
// Enumerating the partitions of a nucleus is the expensive part of Fermi
// break-up, and the same light nuclei come back over and over in a run.

use std::collections::HashMap;
use std::hash::Hash;

pub trait Cache<K, V> {
    /// Cached value for `key`; counts as a use of that entry.
    fn get(&mut self, key: &K) -> Option<V>;

    fn insert(&mut self, key: K, value: V);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded cache, every entry is kept for the lifetime of the model.
#[derive(Debug, Clone)]
pub struct SimpleCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> SimpleCache<K, V> {
    pub fn new() -> Self {
        SimpleCache {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Default for SimpleCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Clone> Cache<K, V> for SimpleCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
struct LfuEntry<V> {
    value: V,
    frequency: u64,
    /// Insertion stamp, breaks frequency ties in favour of the newest entry
    stamp: u64,
}

/// Bounded cache evicting the least frequently used entry when full.
#[derive(Debug, Clone)]
pub struct LfuCache<K, V> {
    capacity: usize,
    entries: HashMap<K, LfuEntry<V>>,
    clock: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> LfuCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        LfuCache {
            capacity,
            entries: HashMap::with_capacity(capacity),
            clock: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn evict(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.frequency, entry.stamp))
            .map(|(key, _)| key.clone());
        if let Some(key) = victim {
            self.entries.remove(&key);
            tracing::trace!(remaining = self.entries.len(), "evicted least frequently used split list");
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Cache<K, V> for LfuCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.get_mut(key)?;
        entry.frequency += 1;
        Some(entry.value.clone())
    }

    fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.clock += 1;
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.stamp = self.clock;
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict();
        }
        self.entries.insert(
            key,
            LfuEntry {
                value,
                frequency: 1,
                stamp: self.clock,
            },
        );
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

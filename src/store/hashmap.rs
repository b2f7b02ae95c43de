//! HashMap-backed entry store.
//!
//! ## Architecture
//! - Keys map to owned values in an `FxHashMap<K, V>` for O(1) lookup.
//! - The store holds no capacity or eviction logic; the facade enforces
//!   the capacity invariant after consulting the eviction policy.
//!
//! ## Core Operations
//! - `set`: insert or overwrite by key.
//! - `get`: fetch by key, pure read.
//! - `delete`: remove by key, no-op if absent.
//!
//! ## Example Usage
//! ```
//! use evictkit::store::hashmap::HashMapStore;
//! use evictkit::store::traits::EntryStore;
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::with_capacity(4);
//! store.set(1, "a".to_string());
//! assert!(store.contains(&1));
//! assert_eq!(store.delete(&1), Some("a".to_string()));
//! ```
//!
//! ## Thread Safety
//! - `HashMapStore` is single-threaded; wrap the whole facade in a lock
//!   for shared use (see [`crate::sync::SharedCache`]).

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::traits::EntryStore;

/// Single-threaded FxHashMap-backed entry store.
///
/// Owns the authoritative value for every live key. Values are opaque to
/// the store: they are moved in, referenced out, and never compared.
#[derive(Debug)]
pub struct HashMapStore<K, V> {
    map: FxHashMap<K, V>,
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Creates an empty store with pre-allocated room for `capacity` entries.
    ///
    /// Bounded caches pass their capacity here so steady-state operation
    /// never reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Iterates over live keys in arbitrary order.
    ///
    /// Used only by invariant checks; eviction order lives in the order
    /// list, never in the store.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K, V> Default for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> EntryStore<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    #[inline]
    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    #[inline]
    fn delete(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // Basic Operations
    // ==============================================

    #[test]
    fn new_store_is_empty() {
        let store: HashMapStore<u64, &str> = HashMapStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut store = HashMapStore::new();
        assert_eq!(store.set(1, "one"), None);
        assert_eq!(store.get(&1), Some(&"one"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_overwrites_and_returns_previous() {
        let mut store = HashMapStore::new();
        store.set("k", 1);
        assert_eq!(store.set("k", 2), Some(1));
        assert_eq!(store.get(&"k"), Some(&2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_entry() {
        let mut store = HashMapStore::new();
        store.set(1, "one");
        assert_eq!(store.delete(&1), Some("one"));
        assert_eq!(store.get(&1), None);
        assert!(store.is_empty());
    }

    #[test]
    fn delete_missing_key_is_noop() {
        let mut store: HashMapStore<u64, &str> = HashMapStore::new();
        assert_eq!(store.delete(&99), None);
        assert!(store.is_empty());
    }

    #[test]
    fn contains_reflects_liveness() {
        let mut store = HashMapStore::new();
        store.set("live", ());
        assert!(store.contains(&"live"));
        assert!(!store.contains(&"dead"));
    }

    #[test]
    fn clear_drops_all_entries() {
        let mut store = HashMapStore::new();
        store.set(1, "a");
        store.set(2, "b");
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains(&1));
    }

    // ==============================================
    // Value Opacity
    // ==============================================

    #[test]
    fn empty_value_and_absence_are_distinguishable() {
        let mut store = HashMapStore::new();
        store.set("empty", String::new());

        // Stored empty string is present; missing key is structurally absent.
        assert_eq!(store.get(&"empty"), Some(&String::new()));
        assert_eq!(store.get(&"missing"), None);
    }

    #[test]
    fn keys_iterates_live_keys() {
        let mut store = HashMapStore::new();
        store.set(1, "a");
        store.set(2, "b");

        let mut keys: Vec<u64> = store.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2]);
    }
}

//! Storage seam for cache entry ownership.
//!
//! The entry store owns the authoritative value for each live key and
//! nothing else: no eviction order, no notification, no capacity logic.
//! Every operation is total over well-formed keys — a store never errors
//! and never evaluates equality on values.

/// Core operations an entry store must provide.
///
/// All methods are side-effect-free beyond the store's own state. Absence
/// is signaled structurally (`Option`), never by a reserved value, so an
/// empty payload and a missing key remain distinguishable.
pub trait EntryStore<K, V> {
    /// Inserts or overwrites the value for `key`.
    ///
    /// Returns the previous value if the key was already live.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Fetches a reference to the value for `key`, if live.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes `key` if present, returning its value. No-op otherwise.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Checks whether `key` is live.
    fn contains(&self, key: &K) -> bool;

    /// Current number of live entries.
    fn len(&self) -> usize;

    /// Checks whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);
}

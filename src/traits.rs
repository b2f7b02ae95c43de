//! Trait seams for the cache surface.
//!
//! Two small traits split the facade's surface by mutability:
//!
//! ```text
//!   ┌────────────────────────────────────┐
//!   │        ReadOnlyCache<K, V>         │
//!   │                                    │
//!   │  contains(&, &K) → bool            │
//!   │  len(&) → usize                    │
//!   │  is_empty(&) → bool                │
//!   └──────────────────┬─────────────────┘
//!                      │
//!                      ▼
//!   ┌────────────────────────────────────┐
//!   │         CoreCache<K, V>            │
//!   │                                    │
//!   │  put(&mut, K, V)                   │
//!   │  get(&, &K) → Option<&V>           │
//!   │  remove(&mut, &K) → Option<V>      │
//!   │  clear(&mut)                       │
//!   └────────────────────────────────────┘
//! ```
//!
//! Generic code that only inspects a cache can take a `ReadOnlyCache`
//! bound; code that populates or invalidates takes `CoreCache`. Note that
//! `get` is `&self` here: no policy in this library promotes entries on
//! read, so lookups never need mutable access.

/// Read-only inspection available on any cache.
pub trait ReadOnlyCache<K, V> {
    /// Checks whether `key` is resident.
    fn contains(&self, key: &K) -> bool;

    /// Current number of resident entries.
    fn len(&self) -> usize;

    /// Checks whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Core operations all caches in this library support.
///
/// `put` has no return value and never reports an error: overflow is
/// resolved internally by the eviction policy, and the one observable
/// side effect (the eviction notification) flows through the configured
/// listener, not the call site.
///
/// # Example
///
/// ```
/// use evictkit::builder::CacheBuilder;
/// use evictkit::policy::EvictionPolicy;
/// use evictkit::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = CacheBuilder::bounded(16)
///     .policy(EvictionPolicy::Fifo)
///     .build::<u64, String>();
/// warm(&mut cache, &[(1, "one".into()), (2, "two".into())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts or overwrites the value for `key`, evicting per policy if
    /// the cache overflows.
    fn put(&mut self, key: K, value: V);

    /// Fetches the value for `key`. Pure read; never affects eviction
    /// order.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes `key` if resident, returning its value. Emits no eviction
    /// notification.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes all entries.
    fn clear(&mut self);
}

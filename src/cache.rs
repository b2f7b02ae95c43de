//! Bounded key/value cache facade.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Cache<K, V, L> Layout                       │
//! │                                                                     │
//! │   store: HashMapStore<K, V>       order: OrderList<K>               │
//! │          key → value                     put order                  │
//! │                                                                     │
//! │   ┌──────────┬──────┐             ┌─────────────────────────┐       │
//! │   │   Key    │Value │             │ Front           Back    │       │
//! │   ├──────────┼──────┤             ├─────────────────────────┤       │
//! │   │  "a"     │  v1  │             │ [a]  [b]  [c]           │       │
//! │   │  "b"     │  v2  │             │  ↑              ↑       │       │
//! │   │  "c"     │  v3  │             │ oldest    most recent   │       │
//! │   └──────────┴──────┘             └─────────────────────────┘       │
//! │                                                                     │
//! │   capacity: Capacity      policy: EvictionPolicy      listener: L   │
//! └─────────────────────────────────────────────────────────────────────┘
//!
//! Put Flow
//! ────────
//!
//!   put(key, value):
//!     1. Write value into the store (insert or overwrite)
//!     2. touch(key) on the order list (re-put relocates to back)
//!     3. If len > bounded capacity:
//!          victim = policy.victim(order)     (pure selection)
//!          delete victim from store + order
//!          listener.on_evict(victim)         (sync, exactly once)
//!     4. Return (never an error)
//!
//! Get Flow
//! ────────
//!
//!   get(&key):
//!     1. Store lookup only — the order list is never consulted
//!     2. Return Option<&V> (absence is structural)
//! ```
//!
//! ## Invariants
//!
//! - After any `put` returns, `len() <= capacity` when bounded; overflow
//!   is resolved by exactly one eviction, so capacity is never exceeded
//!   by more than one entry at any observable point.
//! - The order list's key set equals the store's key set; the two are
//!   mutated together, never independently.
//! - One notification per evicted key, synchronous, before `put` returns.
//!
//! Both invariants are checked under `debug_assertions` after every
//! mutation, and on demand via [`Cache::check_invariants`].
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::builder::CacheBuilder;
//! use evictkit::policy::EvictionPolicy;
//!
//! let mut cache = CacheBuilder::bounded(2)
//!     .policy(EvictionPolicy::Fifo)
//!     .build::<&str, i32>();
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // evicts "a" (oldest put)
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(&2));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```
//!
//! ## Thread Safety
//!
//! - `Cache` is single-threaded by contract. Shared deployments wrap the
//!   whole facade in one lock (see [`crate::sync::SharedCache`]); finer
//!   locking would let another caller observe the store between `touch`
//!   and eviction, breaking the capacity invariant.

use std::hash::Hash;

use crate::ds::OrderList;
use crate::error::InvariantError;
use crate::metrics::{CacheMetrics, MetricsCell};
use crate::notify::{EvictionListener, NoopListener};
use crate::policy::EvictionPolicy;
use crate::store::hashmap::HashMapStore;
use crate::store::traits::EntryStore;
use crate::traits::{CoreCache, ReadOnlyCache};

/// Maximum number of resident entries, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// At most this many entries may be resident. Must be at least 1;
    /// the builder rejects zero.
    Bounded(usize),
    /// No limit; the cache never evicts.
    Unbounded,
}

impl Capacity {
    /// Returns the bound, or `None` when unbounded.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(n) => Some(*n),
            Capacity::Unbounded => None,
        }
    }
}

/// Facade-internal counters. Hit/miss use cells so `get` stays `&self`.
#[derive(Debug, Default)]
struct Counters {
    hits: MetricsCell,
    misses: MetricsCell,
    inserts: u64,
    updates: u64,
    removes: u64,
    evictions: u64,
    sentinel_noops: u64,
}

impl Counters {
    fn snapshot(&self) -> CacheMetrics {
        CacheMetrics {
            hits: self.hits.get(),
            misses: self.misses.get(),
            inserts: self.inserts,
            updates: self.updates,
            removes: self.removes,
            evictions: self.evictions,
            sentinel_noops: self.sentinel_noops,
        }
    }
}

/// Bounded key/value cache with a pluggable eviction policy.
///
/// Coordinates an entry store, a put-order list, and an
/// [`EvictionPolicy`], emitting one synchronous notification through `L`
/// per evicted key. Each instance owns its store and order list outright;
/// there is no process-wide shared state between caches.
///
/// # Type Parameters
///
/// - `K`: key type, `Clone + Eq + Hash`
/// - `V`: value type, fully opaque
/// - `L`: eviction listener, defaults to [`NoopListener`]
///
/// # Example
///
/// ```
/// use evictkit::builder::CacheBuilder;
/// use evictkit::policy::EvictionPolicy;
///
/// let mut cache = CacheBuilder::bounded(2)
///     .policy(EvictionPolicy::StackDiscard)
///     .build::<&str, i32>();
///
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.put("c", 3); // evicts "b", the top prior to this put
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// assert!(cache.contains(&"c"));
/// ```
#[derive(Debug)]
pub struct Cache<K, V, L = NoopListener>
where
    K: Clone + Eq + Hash,
    L: EvictionListener<K>,
{
    store: HashMapStore<K, V>,
    order: OrderList<K>,
    capacity: Capacity,
    policy: EvictionPolicy,
    listener: L,
    counters: Counters,
}

impl<K, V, L> Cache<K, V, L>
where
    K: Clone + Eq + Hash,
    L: EvictionListener<K>,
{
    /// Assembles a cache from validated parts. Construction goes through
    /// [`CacheBuilder`](crate::builder::CacheBuilder), which rejects a
    /// bounded capacity of zero. A bounded capacity paired with the
    /// `Unbounded` policy is kept as configured but never enforced.
    pub(crate) fn from_parts(capacity: Capacity, policy: EvictionPolicy, listener: L) -> Self {
        let prealloc = capacity.limit().unwrap_or(0);
        Self {
            store: HashMapStore::with_capacity(prealloc),
            order: OrderList::with_capacity(prealloc),
            capacity,
            policy,
            listener,
            counters: Counters::default(),
        }
    }

    /// Inserts or overwrites the value for `key`.
    ///
    /// Overwriting marks the key as most recently put (its order-list
    /// slot moves to the back). If the write pushes a bounded cache past
    /// capacity, the policy's victim is deleted from both structures and
    /// the listener is notified — exactly once, synchronously, before
    /// this method returns. `put` never reports an error to the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::builder::CacheBuilder;
    /// use evictkit::policy::EvictionPolicy;
    ///
    /// let mut cache = CacheBuilder::bounded(2)
    ///     .policy(EvictionPolicy::Fifo)
    ///     .build::<&str, i32>();
    ///
    /// cache.put("a", 1);
    /// cache.put("a", 10); // overwrite, still one entry
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.get(&"a"), Some(&10));
    /// ```
    pub fn put(&mut self, key: K, value: V) {
        match self.store.set(key.clone(), value) {
            Some(_) => self.counters.updates += 1,
            None => self.counters.inserts += 1,
        }
        self.order.touch(key);
        self.evict_if_needed();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Sentinel-absorbing form of [`put`](Self::put).
    ///
    /// `None` in either position means "no key" or "no value": the call
    /// is a guaranteed no-op — resident entries, order, and notifications
    /// are all untouched. Callers holding inputs that may be absent route
    /// them through here instead of inventing reserved key or value
    /// markers.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::builder::CacheBuilder;
    /// use evictkit::policy::EvictionPolicy;
    ///
    /// let mut cache = CacheBuilder::bounded(2)
    ///     .policy(EvictionPolicy::Fifo)
    ///     .build::<&str, i32>();
    ///
    /// cache.put_opt(None, Some(1));
    /// cache.put_opt(Some("k"), None);
    /// assert!(cache.is_empty());
    ///
    /// cache.put_opt(Some("k"), Some(1));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => self.counters.sentinel_noops += 1,
        }
    }

    /// Fetches the value for `key`.
    ///
    /// Pure read: the order list is never consulted or updated, so
    /// lookups can never save an entry from eviction or trigger one.
    /// Absence is structural — a stored empty value and a missing key are
    /// never conflated.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::builder::CacheBuilder;
    ///
    /// let mut cache = CacheBuilder::unbounded().build::<&str, String>();
    /// cache.put("empty", String::new());
    ///
    /// assert_eq!(cache.get(&"empty"), Some(&String::new()));
    /// assert_eq!(cache.get(&"missing"), None);
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.store.get(key) {
            Some(value) => {
                self.counters.hits.incr();
                Some(value)
            },
            None => {
                self.counters.misses.incr();
                None
            },
        }
    }

    /// Sentinel-absorbing form of [`get`](Self::get): `None` key yields
    /// `None` without counting a miss.
    #[inline]
    pub fn get_opt(&self, key: Option<&K>) -> Option<&V> {
        key.and_then(|key| self.get(key))
    }

    /// Removes `key` if resident, returning its value.
    ///
    /// Caller-driven removal is not an eviction: no notification fires.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.store.delete(key);
        if removed.is_some() {
            self.order.remove(key);
            self.counters.removes += 1;
        }

        #[cfg(debug_assertions)]
        self.validate_invariants();

        removed
    }

    /// Checks whether `key` is resident, without touching metrics or
    /// eviction order.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Current number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Checks whether the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The configured capacity.
    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// The configured eviction policy.
    #[inline]
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Borrows the eviction listener, e.g. to read a
    /// [`CountingListener`](crate::notify::CountingListener).
    #[inline]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Snapshot of the operation counters.
    #[inline]
    pub fn metrics(&self) -> CacheMetrics {
        self.counters.snapshot()
    }

    /// Removes all entries. No notifications fire; clearing is
    /// caller-driven, not policy-driven.
    pub fn clear(&mut self) {
        self.store.clear();
        self.order.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Evicts the policy's victim if the last put overflowed a bounded
    /// capacity.
    ///
    /// At most one entry leaves per call: a put grows the cache by at
    /// most one entry, so one eviction always restores the invariant.
    fn evict_if_needed(&mut self) {
        let Some(limit) = self.capacity.limit() else {
            return;
        };
        if !self.policy.evicts() || self.store.len() <= limit {
            return;
        }

        if let Some(victim) = self.policy.victim(&self.order).cloned() {
            self.store.delete(&victim);
            self.order.remove(&victim);
            self.counters.evictions += 1;
            self.listener.on_evict(&victim);
        }
    }

    /// Checks the facade's structural invariants, returning a description
    /// of the first violation found.
    ///
    /// A violation is a defect in this library, never a recoverable
    /// runtime condition; this method exists for the test suite and for
    /// debug builds, not for callers to branch on.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.store.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "store holds {} entries but order list tracks {} keys",
                self.store.len(),
                self.order.len()
            )));
        }

        for key in self.order.iter() {
            if !self.store.contains(key) {
                return Err(InvariantError::new("order list tracks a key missing from the store"));
            }
        }
        for key in self.store.keys() {
            if !self.order.contains(key) {
                return Err(InvariantError::new("store holds a key missing from the order list"));
            }
        }

        if let Some(limit) = self.capacity.limit() {
            if self.policy.evicts() && self.store.len() > limit {
                return Err(InvariantError::new(format!(
                    "entry count {} exceeds bounded capacity {}",
                    self.store.len(),
                    limit
                )));
            }
        }

        Ok(())
    }

    /// Debug-build invariant assertion run after every mutation.
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("cache invariant violated: {err}");
        }
    }
}

impl<K, V, L> ReadOnlyCache<K, V> for Cache<K, V, L>
where
    K: Clone + Eq + Hash,
    L: EvictionListener<K>,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Cache::len(self)
    }
}

impl<K, V, L> CoreCache<K, V> for Cache<K, V, L>
where
    K: Clone + Eq + Hash,
    L: EvictionListener<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) {
        Cache::put(self, key, value);
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        Cache::remove(self, key)
    }

    fn clear(&mut self) {
        Cache::clear(self);
    }
}

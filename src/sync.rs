//! Shared-access wrapper around the cache facade.
//!
//! The facade is single-threaded by contract: `touch`, the overflow
//! check, and the eviction must be observed as one indivisible step, or
//! another caller could see the capacity invariant broken mid-put. The
//! recommended discipline is therefore one exclusive lock around the
//! whole store-plus-order pair, which is exactly what [`SharedCache`]
//! provides. Finer-grained locking is deliberately not offered.
//!
//! No operation here blocks on anything but the lock itself; the cache
//! has no I/O, timers, or suspension points, so hold times are short and
//! bounded.
//!
//! ## Example Usage
//!
//! ```
//! use std::thread;
//!
//! use evictkit::policy::EvictionPolicy;
//! use evictkit::sync::SharedCache;
//!
//! let cache = SharedCache::bounded(64, EvictionPolicy::Fifo);
//!
//! thread::scope(|s| {
//!     for t in 0..4u64 {
//!         let cache = &cache;
//!         s.spawn(move || {
//!             for i in 0..100 {
//!                 cache.put(t * 1000 + i, i);
//!             }
//!         });
//!     }
//! });
//!
//! assert!(cache.len() <= 64);
//! ```

use std::hash::Hash;

use parking_lot::Mutex;

use crate::builder::CacheBuilder;
use crate::cache::{Cache, Capacity};
use crate::error::ConfigError;
use crate::metrics::CacheMetrics;
use crate::notify::{EvictionListener, NoopListener};
use crate::policy::EvictionPolicy;

/// Thread-safe cache: one `parking_lot::Mutex` around the whole facade.
///
/// Values are returned by clone rather than by reference, since a
/// reference into the cache cannot outlive the lock guard.
///
/// # Type Parameters
///
/// - `K`: key type, `Clone + Eq + Hash`
/// - `V`: value type, `Clone` (lookups clone out of the guard)
/// - `L`: eviction listener, defaults to [`NoopListener`]
#[derive(Debug)]
pub struct SharedCache<K, V, L = NoopListener>
where
    K: Clone + Eq + Hash,
    L: EvictionListener<K>,
{
    inner: Mutex<Cache<K, V, L>>,
}

impl<K, V> SharedCache<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Creates a shared bounded cache with the given policy.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; use [`try_bounded`](Self::try_bounded)
    /// for user-supplied capacities.
    pub fn bounded(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            inner: Mutex::new(CacheBuilder::bounded(capacity).policy(policy).build()),
        }
    }

    /// Fallible form of [`bounded`](Self::bounded).
    pub fn try_bounded(capacity: usize, policy: EvictionPolicy) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Mutex::new(CacheBuilder::bounded(capacity).policy(policy).try_build()?),
        })
    }

    /// Creates a shared unbounded cache.
    pub fn unbounded() -> Self {
        Self {
            inner: Mutex::new(CacheBuilder::unbounded().build()),
        }
    }
}

impl<K, V, L> SharedCache<K, V, L>
where
    K: Clone + Eq + Hash,
    V: Clone,
    L: EvictionListener<K>,
{
    /// Wraps an already-built cache.
    pub fn from_cache(cache: Cache<K, V, L>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Inserts or overwrites under the lock. Eviction and notification
    /// complete before the lock is released.
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// Sentinel-absorbing put under the lock.
    pub fn put_opt(&self, key: Option<K>, value: Option<V>) {
        self.inner.lock().put_opt(key, value);
    }

    /// Fetches a clone of the value for `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Checks residency under the lock.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Current number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Checks whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> Capacity {
        self.inner.lock().capacity()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Snapshot of the operation counters.
    pub fn metrics(&self) -> CacheMetrics {
        self.inner.lock().metrics()
    }
}

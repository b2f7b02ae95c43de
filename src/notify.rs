//! Eviction notification sinks.
//!
//! The cache emits exactly one synchronous notification per evicted key,
//! before the triggering `put` returns. The sink is abstract: a log line,
//! a metrics counter, or a test harness can all observe evictions without
//! the cache knowing about consoles or formatting conventions. Sink
//! behavior never feeds back into the cache — a listener cannot veto or
//! retry an eviction, and the put completes regardless of what the sink
//! does with the key.
//!
//! ## Key Components
//!
//! - [`EvictionListener`]: the sink trait.
//! - [`NoopListener`]: default, zero-cost.
//! - [`CountingListener`]: atomic eviction counter.
//! - [`TracingListener`]: structured `tracing` event per eviction.
//! - [`FnListener`]: adapter over any `Fn(&K)` closure.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::builder::CacheBuilder;
//! use evictkit::notify::CountingListener;
//! use evictkit::policy::EvictionPolicy;
//!
//! let listener = CountingListener::default();
//! let mut cache = CacheBuilder::bounded(2)
//!     .policy(EvictionPolicy::Fifo)
//!     .build_with_listener::<u64, &str, _>(listener);
//!
//! cache.put(1, "a");
//! cache.put(2, "b");
//! cache.put(3, "c"); // evicts key 1
//!
//! assert_eq!(cache.listener().evictions(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sink for eviction notifications.
///
/// `on_evict` is invoked synchronously, exactly once per evicted key,
/// after the victim has been removed from the cache and before the
/// triggering `put` returns. Implementations must be infallible: there is
/// no return value to propagate and a sink that cannot deliver must drop
/// the notification rather than disturb the cache.
pub trait EvictionListener<K> {
    /// Observes the eviction of `key`.
    fn on_evict(&self, key: &K);
}

/// Listener that ignores all evictions. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<K> EvictionListener<K> for NoopListener {
    #[inline]
    fn on_evict(&self, _key: &K) {}
}

/// Listener that counts evictions with a relaxed atomic.
///
/// Interior mutability keeps `on_evict` at `&self`, so the same counter
/// can be read while the cache borrows the listener.
#[derive(Debug, Default)]
pub struct CountingListener {
    evictions: AtomicU64,
}

impl CountingListener {
    /// Number of evictions observed so far.
    #[inline]
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }
}

impl<K> EvictionListener<K> for CountingListener {
    #[inline]
    fn on_evict(&self, _key: &K) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }
}

/// Listener that emits a structured `tracing` event per eviction.
///
/// The event carries the discarded key at debug level on the
/// `evictkit::evict` target, replacing ad-hoc `DISCARD:` prints with
/// something a subscriber can filter and format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl<K> EvictionListener<K> for TracingListener
where
    K: Debug,
{
    fn on_evict(&self, key: &K) {
        tracing::debug!(target: "evictkit::evict", key = ?key, "discarding entry");
    }
}

/// Adapter turning any `Fn(&K)` closure into a listener.
///
/// Handy for test harnesses that want to record victims in order:
///
/// ```
/// use std::cell::RefCell;
///
/// use evictkit::builder::CacheBuilder;
/// use evictkit::notify::FnListener;
/// use evictkit::policy::EvictionPolicy;
///
/// let victims = RefCell::new(Vec::new());
/// let mut cache = CacheBuilder::bounded(1)
///     .policy(EvictionPolicy::Fifo)
///     .build_with_listener::<u64, &str, _>(FnListener::new(|k: &u64| {
///         victims.borrow_mut().push(*k);
///     }));
///
/// cache.put(1, "a");
/// cache.put(2, "b");
/// drop(cache);
/// assert_eq!(victims.into_inner(), vec![1]);
/// ```
pub struct FnListener<F> {
    f: F,
}

impl<F> FnListener<F> {
    /// Wraps `f` as an eviction listener.
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<K, F> EvictionListener<K> for FnListener<F>
where
    F: Fn(&K),
{
    #[inline]
    fn on_evict(&self, key: &K) {
        (self.f)(key);
    }
}

impl<F> Debug for FnListener<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn noop_listener_accepts_any_key() {
        let listener = NoopListener;
        EvictionListener::on_evict(&listener, &42u64);
        EvictionListener::on_evict(&listener, &"key");
    }

    #[test]
    fn counting_listener_counts() {
        let listener = CountingListener::default();
        assert_eq!(listener.evictions(), 0);

        EvictionListener::on_evict(&listener, &1u64);
        EvictionListener::on_evict(&listener, &2u64);
        assert_eq!(listener.evictions(), 2);
    }

    #[test]
    fn fn_listener_records_victims_in_order() {
        let seen = RefCell::new(Vec::new());
        let listener = FnListener::new(|k: &u64| seen.borrow_mut().push(*k));

        listener.on_evict(&3);
        listener.on_evict(&1);
        assert_eq!(*seen.borrow(), vec![3, 1]);
    }

    #[test]
    fn tracing_listener_does_not_panic_without_subscriber() {
        let listener = TracingListener;
        EvictionListener::on_evict(&listener, &"orphaned");
    }
}

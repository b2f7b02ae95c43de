//! Unified cache builder for all eviction policies.
//!
//! Construction is the only moment configuration can vary: capacity,
//! policy, and listener are fixed for the cache's lifetime, and every
//! public constructor routes through the builder so validation lives in
//! one place.
//!
//! ## Example
//!
//! ```
//! use evictkit::builder::CacheBuilder;
//! use evictkit::policy::EvictionPolicy;
//!
//! let mut cache = CacheBuilder::bounded(100)
//!     .policy(EvictionPolicy::Fifo)
//!     .build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::cache::{Cache, Capacity};
use crate::error::ConfigError;
use crate::notify::{EvictionListener, NoopListener};
use crate::policy::EvictionPolicy;

/// Builder for cache instances.
///
/// Defaults: bounded builders start with [`EvictionPolicy::Fifo`],
/// unbounded builders with [`EvictionPolicy::Unbounded`]; the listener
/// defaults to [`NoopListener`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: Capacity,
    policy: EvictionPolicy,
}

impl CacheBuilder {
    /// Starts a builder for a bounded cache holding at most `capacity`
    /// entries.
    ///
    /// A capacity of zero is rejected at build time: a cache that can
    /// hold nothing is a configuration mistake, not a degenerate cache.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Capacity::Bounded(capacity),
            policy: EvictionPolicy::Fifo,
        }
    }

    /// Starts a builder for an unbounded cache, which never evicts.
    pub fn unbounded() -> Self {
        Self {
            capacity: Capacity::Unbounded,
            policy: EvictionPolicy::Unbounded,
        }
    }

    /// Selects the eviction policy.
    ///
    /// Pairing a bounded capacity with [`EvictionPolicy::Unbounded`] is
    /// allowed; the capacity is simply never enforced.
    pub fn policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the configuration and builds a cache with the default
    /// [`NoopListener`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a bounded capacity of zero.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::builder::CacheBuilder;
    ///
    /// assert!(CacheBuilder::bounded(0).try_build::<u64, u64>().is_err());
    /// assert!(CacheBuilder::bounded(1).try_build::<u64, u64>().is_ok());
    /// ```
    pub fn try_build<K, V>(self) -> Result<Cache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        self.try_build_with_listener(NoopListener)
    }

    /// Validates the configuration and builds a cache with `listener` as
    /// the eviction notification sink.
    pub fn try_build_with_listener<K, V, L>(
        self,
        listener: L,
    ) -> Result<Cache<K, V, L>, ConfigError>
    where
        K: Clone + Eq + Hash,
        L: EvictionListener<K>,
    {
        if self.capacity == Capacity::Bounded(0) {
            return Err(ConfigError::new("bounded capacity must be at least 1"));
        }
        Ok(Cache::from_parts(self.capacity, self.policy, listener))
    }

    /// Builds a cache with the default [`NoopListener`].
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration; use
    /// [`try_build`](Self::try_build) for user-supplied parameters.
    pub fn build<K, V>(self) -> Cache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        self.build_with_listener(NoopListener)
    }

    /// Builds a cache with `listener` as the eviction notification sink.
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration; use
    /// [`try_build_with_listener`](Self::try_build_with_listener) for
    /// user-supplied parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::builder::CacheBuilder;
    /// use evictkit::notify::TracingListener;
    /// use evictkit::policy::EvictionPolicy;
    ///
    /// let mut cache = CacheBuilder::bounded(2)
    ///     .policy(EvictionPolicy::StackDiscard)
    ///     .build_with_listener::<&str, i32, _>(TracingListener);
    /// cache.put("a", 1);
    /// ```
    pub fn build_with_listener<K, V, L>(self, listener: L) -> Cache<K, V, L>
    where
        K: Clone + Eq + Hash,
        L: EvictionListener<K>,
    {
        match self.try_build_with_listener(listener) {
            Ok(cache) => cache,
            Err(err) => panic!("invalid cache configuration: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::CountingListener;

    #[test]
    fn all_policies_support_basic_ops() {
        let policies = [
            EvictionPolicy::Unbounded,
            EvictionPolicy::Fifo,
            EvictionPolicy::StackDiscard,
            EvictionPolicy::RecencyDiscard,
        ];

        for policy in policies {
            let mut cache = CacheBuilder::bounded(10)
                .policy(policy)
                .build::<u64, String>();

            cache.put(1, "one".to_string());
            cache.put(2, "two".to_string());

            assert_eq!(cache.get(&1), Some(&"one".to_string()));
            assert_eq!(cache.get(&3), None);
            assert!(cache.contains(&1));
            assert!(!cache.contains(&99));
            assert_eq!(cache.len(), 2);

            cache.put(1, "ONE".to_string());
            assert_eq!(cache.get(&1), Some(&"ONE".to_string()));
            assert_eq!(cache.len(), 2);

            cache.clear();
            assert!(cache.is_empty());
        }
    }

    #[test]
    fn bounded_defaults_to_fifo() {
        let cache = CacheBuilder::bounded(4).build::<u64, u64>();
        assert_eq!(cache.policy(), EvictionPolicy::Fifo);
    }

    #[test]
    fn unbounded_defaults_to_unbounded_policy() {
        let cache = CacheBuilder::unbounded().build::<u64, u64>();
        assert_eq!(cache.policy(), EvictionPolicy::Unbounded);
        assert_eq!(cache.capacity(), Capacity::Unbounded);
    }

    #[test]
    fn zero_capacity_is_a_config_error() {
        let err = CacheBuilder::bounded(0).try_build::<u64, u64>().unwrap_err();
        assert!(err.message().contains("capacity"));
    }

    #[test]
    #[should_panic(expected = "invalid cache configuration")]
    fn build_panics_on_zero_capacity() {
        let _ = CacheBuilder::bounded(0).build::<u64, u64>();
    }

    #[test]
    fn listener_is_carried_into_the_cache() {
        let mut cache = CacheBuilder::bounded(1)
            .policy(EvictionPolicy::Fifo)
            .build_with_listener::<u64, u64, _>(CountingListener::default());

        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.listener().evictions(), 1);
    }

    #[test]
    fn capacity_enforcement_through_builder() {
        let mut cache = CacheBuilder::bounded(2).build::<u64, String>();

        cache.put(1, "one".to_string());
        cache.put(2, "two".to_string());
        cache.put(3, "three".to_string()); // evicts key 1 under FIFO

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }
}

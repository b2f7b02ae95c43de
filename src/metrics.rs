//! Lightweight operation counters for the cache facade.
//!
//! Counters only record; they never influence cache behavior. The facade
//! bumps them inline and exposes a [`Copy`] snapshot so benchmarks and
//! tests can diff before/after states without borrowing the cache.

use std::cell::Cell;

/// A metrics-only counter cell.
///
/// Interior mutability lets `&self` read paths (`get`) count hits and
/// misses. Metrics are observational and never affect correctness; for
/// shared use the owning cache is externally synchronized (see
/// [`crate::sync::SharedCache`]).
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Snapshot of facade-level operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    /// `get` calls that found a live entry.
    pub hits: u64,
    /// `get` calls that found nothing.
    pub misses: u64,
    /// `put` calls that created a new entry.
    pub inserts: u64,
    /// `put` calls that overwrote a live entry.
    pub updates: u64,
    /// Caller-driven `remove` calls that deleted a live entry.
    pub removes: u64,
    /// Policy-driven evictions.
    pub evictions: u64,
    /// `put_opt` calls absorbed as sentinel no-ops.
    pub sentinel_noops: u64,
}

impl CacheMetrics {
    /// Total `get` calls observed.
    #[inline]
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit fraction over all lookups, or `None` before the first lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        let lookups = self.lookups();
        (lookups > 0).then(|| self.hits as f64 / lookups as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_starts_at_zero_and_increments() {
        let cell = MetricsCell::new();
        assert_eq!(cell.get(), 0);
        cell.incr();
        cell.incr();
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn default_snapshot_is_zeroed() {
        let m = CacheMetrics::default();
        assert_eq!(m.lookups(), 0);
        assert_eq!(m.hit_rate(), None);
    }

    #[test]
    fn hit_rate_over_lookups() {
        let m = CacheMetrics {
            hits: 3,
            misses: 1,
            ..CacheMetrics::default()
        };
        assert_eq!(m.lookups(), 4);
        assert_eq!(m.hit_rate(), Some(0.75));
    }

    #[test]
    fn snapshots_compare_by_value() {
        let a = CacheMetrics {
            evictions: 2,
            ..CacheMetrics::default()
        };
        let b = a;
        assert_eq!(a, b);
    }
}

//! Error types for the evictkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (e.g. a bounded capacity of zero).
//! - [`InvariantError`]: Returned when internal data-structure invariants
//!   are violated (debug-oriented `check_invariants` methods).
//!
//! Normal cache operations (`put`, `get`, `remove`) are total and never
//! produce either error; these types only surface at construction time or
//! from explicit invariant checks.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::builder::CacheBuilder;
//! use evictkit::error::ConfigError;
//! use evictkit::policy::EvictionPolicy;
//!
//! // Fallible construction for user-supplied parameters
//! let cache = CacheBuilder::bounded(0)
//!     .policy(EvictionPolicy::Fifo)
//!     .try_build::<String, i32>();
//! assert!(cache.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build)
/// when the requested configuration cannot yield a well-formed cache
/// (currently: a bounded capacity of zero). Carries a human-readable
/// description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use evictkit::builder::CacheBuilder;
///
/// let err = CacheBuilder::bounded(0).try_build::<u64, u64>().unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`Cache::check_invariants`](crate::cache::Cache::check_invariants).
/// A violated invariant (entry count above a bounded capacity, or an
/// order-list/store key-set mismatch) is a defect in this library, never a
/// recoverable runtime condition; the error exists so the test suite can
/// report *which* invariant broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("bounded capacity must be > 0");
        assert_eq!(err.to_string(), "bounded capacity must be > 0");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("order list / store key-set mismatch");
        assert_eq!(err.to_string(), "order list / store key-set mismatch");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("entry count above capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("entry count above capacity"));
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}

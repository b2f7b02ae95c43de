//! evictkit: bounded key/value caching with pluggable, observable eviction.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod metrics;
pub mod notify;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod sync;
pub mod traits;

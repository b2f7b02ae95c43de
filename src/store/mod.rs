//! Entry storage for the cache facade.
//!
//! Stores focus on key/value ownership and lookup semantics, while the
//! policy and order list manage eviction order. This keeps victim selection
//! independent of how values are stored.

pub mod hashmap;
pub mod traits;

pub use hashmap::HashMapStore;
pub use traits::EntryStore;

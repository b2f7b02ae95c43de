//! Put-order tracking for eviction policies.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      OrderList<K> Layout                       │
//! │                                                                │
//! │   order: Vec<K>        put order, one slot per live key        │
//! │                                                                │
//! │   ┌──────────────────────────────────────┐                     │
//! │   │ Front                          Back  │                     │
//! │   ├──────────────────────────────────────┤                     │
//! │   │ [a]   [b]   [c]   [d]                │                     │
//! │   │  ↑                 ↑                 │                     │
//! │   │ oldest put    most recent put        │                     │
//! │   └──────────────────────────────────────┘                     │
//! │                                                                │
//! │   touch(b): remove b's slot, append to back → [a, c, d, b]     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`OrderList`]: ordered key sequence, append-only except for explicit
//!   removal, one occurrence per key.
//!
//! ## Operations
//!
//! | Operation    | Time  | Notes                                    |
//! |--------------|-------|------------------------------------------|
//! | `touch`      | O(n)  | linear scan to relocate an existing key  |
//! | `remove`     | O(n)  | linear scan, no-op if absent             |
//! | `front`      | O(1)  | oldest-touched key                       |
//! | `prior_back` | O(1)  | second-from-back key                     |
//!
//! Linear relocation is deliberate: the list holds at most `capacity`
//! keys and the facade calls `touch` once per put.
//!
//! ## Algorithm Properties
//!
//! - The sequence total-orders all resident keys by most-recent-put, so a
//!   policy's candidate is unique and deterministic whenever the list is
//!   non-empty — there are no ties to break.
//! - Only `put` order is recorded. Reads never move a key; access-based
//!   promotion is explicitly outside this structure's contract.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::ds::OrderList;
//!
//! let mut order = OrderList::new();
//! order.touch("a");
//! order.touch("b");
//! order.touch("a"); // relocates "a" to the back
//!
//! assert_eq!(order.front(), Some(&"b"));
//! assert_eq!(order.prior_back(), Some(&"b"));
//! ```

/// Ordered sequence of keys recording relative put recency.
///
/// A key appears at most once. The front is the oldest-touched key, the
/// back the most recently touched. The cache facade mutates the list in
/// lockstep with its entry store so the two key sets are always equal.
#[derive(Debug, Clone)]
pub struct OrderList<K> {
    order: Vec<K>,
}

impl<K> OrderList<K>
where
    K: Eq,
{
    /// Creates an empty order list.
    #[inline]
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Creates an empty order list with pre-allocated room for `capacity`
    /// keys.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
        }
    }

    /// Marks `key` as most recently put.
    ///
    /// If the key is already tracked its current slot is removed first, so
    /// re-putting a key relocates it to the back rather than duplicating
    /// it. Untracked keys are appended directly.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::ds::OrderList;
    ///
    /// let mut order = OrderList::new();
    /// order.touch(1);
    /// order.touch(2);
    /// order.touch(1);
    ///
    /// assert_eq!(order.front(), Some(&2));
    /// assert_eq!(order.len(), 2);
    /// ```
    pub fn touch(&mut self, key: K) {
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
        }
        self.order.push(key);
    }

    /// Removes `key` from the sequence. No-op if the key is not tracked.
    pub fn remove(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    /// Returns the oldest-touched key (the front), if any.
    ///
    /// This is the FIFO eviction candidate.
    #[inline]
    pub fn front(&self) -> Option<&K> {
        self.order.first()
    }

    /// Returns the second-from-back key, if the list holds at least two.
    ///
    /// After the triggering put has been touched to the back, this is the
    /// previous top of the stack — the stack-discard eviction candidate.
    #[inline]
    pub fn prior_back(&self) -> Option<&K> {
        self.order.len().checked_sub(2).map(|i| &self.order[i])
    }

    /// Checks whether `key` is tracked.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }

    /// Number of tracked keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Checks whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Iterates keys from oldest-touched to most recently touched.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

impl<K> Default for OrderList<K>
where
    K: Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

//! Eviction policies: victim selection over the put-order list.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                     Victim Selection per Policy                      │
//! │                                                                      │
//! │   OrderList (front → back):   [a]   [b]   [c]   [d*]                 │
//! │                                ↑           ↑     ↑                   │
//! │                              oldest   prior top  triggering put      │
//! │                                                                      │
//! │   Unbounded       → never consulted, no eviction ever                │
//! │   Fifo            → a   (front, oldest-touched)                      │
//! │   StackDiscard    → c   (second-from-back, the previous top)         │
//! │   RecencyDiscard  → c   (identical selection; see quirk below)       │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each policy is a pure function from order-list state to a victim key,
//! evaluated by the facade only when a put has pushed the entry count past
//! a bounded capacity. The triggering key sits at the back of the list at
//! that moment, so the stack-style policies keep it and discard the key
//! beneath it.
//!
//! ## The RecencyDiscard quirk
//!
//! [`EvictionPolicy::RecencyDiscard`] selects the same victim as
//! [`EvictionPolicy::StackDiscard`]: recency is recorded only on `put`,
//! never on `get`, so "most recently used" collapses to "most recently
//! put prior to the trigger". The two variants are kept distinct because
//! they express distinct configuration intents, but their observable
//! behavior is identical. A true read-recency policy would require the
//! facade to touch the order list inside `get`, which is explicitly
//! outside this library's contract.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::ds::OrderList;
//! use evictkit::policy::EvictionPolicy;
//!
//! let mut order = OrderList::new();
//! order.touch("a");
//! order.touch("b");
//! order.touch("c");
//!
//! assert_eq!(EvictionPolicy::Fifo.victim(&order), Some(&"a"));
//! assert_eq!(EvictionPolicy::StackDiscard.victim(&order), Some(&"b"));
//! assert_eq!(EvictionPolicy::Unbounded.victim(&order), None);
//! ```

use crate::ds::OrderList;

/// Available eviction policies, fixed at cache construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Never evicts; the cache grows without bound and any configured
    /// capacity is ignored.
    Unbounded,
    /// First In, First Out: evicts the oldest-touched key (queue front).
    Fifo,
    /// Stack discard: evicts the most-recently-touched key prior to the
    /// put that triggered overflow — the previous top of the stack. The
    /// triggering entry itself is kept as the new top.
    StackDiscard,
    /// Recency discard ("MRU" in name): selects the identical victim as
    /// [`StackDiscard`](Self::StackDiscard) because recency is tracked
    /// only on put, never on get. See the module docs for the quirk.
    RecencyDiscard,
}

impl EvictionPolicy {
    /// Selects the victim this policy would evict, without mutating the
    /// order list.
    ///
    /// Returns `None` for [`Unbounded`](Self::Unbounded), and for order
    /// lists too short to hold a candidate. The facade only consults a
    /// policy after an overflowing put, at which point a bounded cache
    /// holds at least two keys and the candidate is always `Some`.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::ds::OrderList;
    /// use evictkit::policy::EvictionPolicy;
    ///
    /// let mut order = OrderList::new();
    /// order.touch(1);
    /// order.touch(2);
    /// order.touch(3);
    ///
    /// assert_eq!(EvictionPolicy::Fifo.victim(&order), Some(&1));
    /// assert_eq!(EvictionPolicy::RecencyDiscard.victim(&order), Some(&2));
    /// ```
    #[inline]
    pub fn victim<'a, K>(&self, order: &'a OrderList<K>) -> Option<&'a K>
    where
        K: Eq,
    {
        match self {
            EvictionPolicy::Unbounded => None,
            EvictionPolicy::Fifo => order.front(),
            EvictionPolicy::StackDiscard | EvictionPolicy::RecencyDiscard => order.prior_back(),
        }
    }

    /// Checks whether this policy ever evicts.
    ///
    /// Only [`Unbounded`](Self::Unbounded) returns `false`; every other
    /// policy enforces a bounded capacity.
    #[inline]
    pub fn evicts(&self) -> bool {
        !matches!(self, EvictionPolicy::Unbounded)
    }
}

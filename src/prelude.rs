pub use crate::builder::CacheBuilder;
pub use crate::cache::{Cache, Capacity};
pub use crate::ds::OrderList;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::metrics::CacheMetrics;
pub use crate::notify::{
    CountingListener, EvictionListener, FnListener, NoopListener, TracingListener,
};
pub use crate::policy::EvictionPolicy;
pub use crate::store::{EntryStore, HashMapStore};
pub use crate::sync::SharedCache;
pub use crate::traits::{CoreCache, ReadOnlyCache};

//! Example wiring the tracing listener to a subscriber so each eviction
//! shows up as a structured log event.
//!
//! Run with: RUST_LOG=debug cargo run --example discard_log

use evictkit::builder::CacheBuilder;
use evictkit::notify::TracingListener;
use evictkit::policy::EvictionPolicy;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut cache = CacheBuilder::bounded(2)
        .policy(EvictionPolicy::Fifo)
        .build_with_listener::<&str, i32, _>(TracingListener);

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3); // logs the discard of "a"
    cache.put("d", 4); // logs the discard of "b"

    println!("resident: {} entries, {} evictions", cache.len(), cache.metrics().evictions);
}

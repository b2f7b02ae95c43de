//! Example demonstrating the FIFO eviction policy.
//!
//! FIFO evicts the **oldest-put** entry when capacity is exceeded:
//! classic queue discipline, first admitted is first discarded.
//!
//! Run with: cargo run --example basic_fifo

use evictkit::builder::CacheBuilder;
use evictkit::policy::EvictionPolicy;

fn main() {
    println!("=== FIFO Cache Example ===\n");

    let mut cache = CacheBuilder::bounded(3)
        .policy(EvictionPolicy::Fifo)
        .build::<&str, i32>();

    println!("Created FIFO cache: capacity={:?}\n", cache.capacity());

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    println!("Inserted a, b, c (order: [a, b, c])");
    println!("  len: {}", cache.len());

    // Insert d - FIFO evicts a (oldest)
    cache.put("d", 4);
    println!("\nInserted d:");
    println!("  contains a? {} (oldest, evicted)", cache.contains(&"a"));
    println!("  contains b? {}", cache.contains(&"b"));
    println!("  contains d? {} (newly inserted)", cache.contains(&"d"));

    // Re-putting a key moves it to most-recent
    println!("\n=== Re-put Changes the Victim ===\n");

    let mut cache = CacheBuilder::bounded(2)
        .policy(EvictionPolicy::Fifo)
        .build::<&str, i32>();

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("a", 10); // "a" is now most recent
    cache.put("c", 3); // evicts "b", not "a"

    println!("put a, put b, put a again, put c:");
    println!("  contains a? {} (re-put saved it)", cache.contains(&"a"));
    println!("  contains b? {} (became oldest, evicted)", cache.contains(&"b"));
    println!("  contains c? {}", cache.contains(&"c"));

    println!("\nMetrics: {:?}", cache.metrics());
}

// Expected output:
// === FIFO Cache Example ===
//
// Created FIFO cache: capacity=Bounded(3)
//
// Inserted a, b, c (order: [a, b, c])
//   len: 3
//
// Inserted d:
//   contains a? false (oldest, evicted)
//   contains b? true
//   contains d? true (newly inserted)
//
// === Re-put Changes the Victim ===
//
// put a, put b, put a again, put c:
//   contains a? true (re-put saved it)
//   contains b? false (became oldest, evicted)
//   contains c? true

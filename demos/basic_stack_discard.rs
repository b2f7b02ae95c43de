//! Example demonstrating the stack-discard eviction policy.
//!
//! Stack discard keeps the entry that just triggered overflow as the new
//! top of the stack and evicts the previous top — the most recently put
//! entry *before* the trigger. The oldest entries survive indefinitely.
//!
//! Run with: cargo run --example basic_stack_discard

use evictkit::builder::CacheBuilder;
use evictkit::policy::EvictionPolicy;

fn main() {
    println!("=== Stack-Discard Cache Example ===\n");

    let mut cache = CacheBuilder::bounded(3)
        .policy(EvictionPolicy::StackDiscard)
        .build::<&str, i32>();

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    println!("Inserted a, b, c (stack bottom → top: [a, b, c])");

    // Insert d: d becomes the new top, c (the prior top) is discarded
    cache.put("d", 4);
    println!("\nInserted d:");
    println!("  contains a? {} (bottom, survives)", cache.contains(&"a"));
    println!("  contains c? {} (prior top, discarded)", cache.contains(&"c"));
    println!("  contains d? {} (new top, kept)", cache.contains(&"d"));

    // Reads never promote: RecencyDiscard behaves identically
    println!("\n=== Reads Never Promote ===\n");

    let mut cache = CacheBuilder::bounded(2)
        .policy(EvictionPolicy::RecencyDiscard)
        .build::<&str, i32>();

    cache.put("a", 1);
    cache.put("b", 2);
    for _ in 0..100 {
        cache.get(&"b");
    }
    cache.put("c", 3); // still evicts "b": recency is put-only

    println!("put a, put b, get b x100, put c:");
    println!("  contains a? {}", cache.contains(&"a"));
    println!(
        "  contains b? {} (100 reads did not save it)",
        cache.contains(&"b")
    );
    println!("  contains c? {}", cache.contains(&"c"));
}

// Expected output:
// === Stack-Discard Cache Example ===
//
// Inserted a, b, c (stack bottom → top: [a, b, c])
//
// Inserted d:
//   contains a? true (bottom, survives)
//   contains c? false (prior top, discarded)
//   contains d? true (new top, kept)
//
// === Reads Never Promote ===
//
// put a, put b, get b x100, put c:
//   contains a? true
//   contains b? false (100 reads did not save it)
//   contains c? true

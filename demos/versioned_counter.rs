/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Versioned Counter Example
//!
//! Demonstrates a (value, version) pair that always moves together.

use prism3_dwcas::{
    AlignedUint128,
    Backend,
    Uint128,
};
use std::sync::Arc;
use std::thread;

/// Adds `delta` to the value word and bumps the version word.
fn add(cell: &AlignedUint128, delta: u64) -> Uint128 {
    let mut current = cell.load();
    loop {
        let next = Uint128::new(current.lo.wrapping_add(delta), current.hi + 1);
        let (prev, swapped) = cell.acq_rel(current, next);
        if swapped {
            return next;
        }
        current = prev;
    }
}

fn main() {
    println!("=== Versioned Counter Example ===\n");
    println!("Backend: {}\n", Backend::current());

    // Example 1: Single-threaded updates
    println!("1. Single-threaded Updates:");
    let cell = AlignedUint128::new(0, 0);
    println!("   Initial: {:?}", cell.load());
    add(&cell, 5);
    add(&cell, 10);
    println!("   After two adds: {:?}", cell.load());

    // Example 2: Stale expected value
    println!("\n2. Stale Expected Value:");
    let stale = Uint128::new(0, 0);
    let (prev, swapped) = cell.acq_rel(stale, Uint128::new(999, 999));
    println!("   Swapped: {}, observed: {:?}", swapped, prev);

    // Example 3: Multi-threaded updates
    println!("\n3. Multi-threaded Updates:");
    let cell = Arc::new(AlignedUint128::new(0, 0));
    let num_threads = 8;
    let adds_per_thread = 10_000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let cell = cell.clone();
        let handle = thread::spawn(move || {
            for _ in 0..adds_per_thread {
                add(&cell, 2);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let final_value = cell.load();
    println!(
        "   Final: value={} version={} (expected value={}, version={})",
        final_value.lo,
        final_value.hi,
        2 * num_threads * adds_per_thread,
        num_threads * adds_per_thread
    );

    println!("\n=== Example completed ===");
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Tagged Stack Example
//!
//! A lock-free stack over a fixed node arena. The head packs the top index
//! and a tag that changes on every update, so a pop that raced with a
//! pop-push of the same node (the ABA case) fails instead of corrupting the
//! list.

use prism3_dwcas::{
    barrier_acquire,
    AlignedUint128,
    Uint128,
};
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::Arc;
use std::thread;

/// Index value meaning "no node".
const NIL: u64 = 0;

struct Stack {
    /// lo: top index + 1 (NIL when empty); hi: tag.
    head: AlignedUint128,
    next: Vec<AtomicUsize>,
}

impl Stack {
    /// Creates a stack holding all nodes `0..capacity`.
    fn full(capacity: usize) -> Self {
        let stack = Stack {
            head: AlignedUint128::new(NIL, 0),
            next: (0..capacity).map(|_| AtomicUsize::new(0)).collect(),
        };
        for index in 0..capacity {
            stack.push(index);
        }
        stack
    }

    fn push(&self, index: usize) {
        let mut head = self.head.load();
        loop {
            self.next[index].store(head.lo as usize, Ordering::Release);
            let new_head = Uint128::new(index as u64 + 1, head.hi.wrapping_add(1));
            let (prev, swapped) = self.head.release(head, new_head);
            if swapped {
                return;
            }
            head = prev;
        }
    }

    fn pop(&self) -> Option<usize> {
        let mut head = self.head.load();
        loop {
            if head.lo == NIL {
                return None;
            }
            let top = head.lo as usize - 1;
            let next = self.next[top].load(Ordering::Acquire) as u64;
            let new_head = Uint128::new(next, head.hi.wrapping_add(1));
            let (prev, swapped) = self.head.acq_rel(head, new_head);
            if swapped {
                return Some(top);
            }
            // A failed CAS returns `prev` with relaxed ordering; the fence
            // makes the pusher's link visible before `next[top]` is read.
            barrier_acquire();
            head = prev;
        }
    }

    fn len(&self) -> usize {
        let mut count = 0;
        let mut link = self.head.load().lo as usize;
        while link != NIL as usize {
            count += 1;
            link = self.next[link - 1].load(Ordering::Acquire);
        }
        count
    }
}

fn main() {
    println!("=== Tagged Stack Example ===\n");

    // Example 1: Basic push/pop
    println!("1. Basic Push/Pop:");
    let stack = Stack::full(4);
    println!("   Initial length: {}", stack.len());
    let a = stack.pop();
    let b = stack.pop();
    println!("   Popped: {:?}, {:?}", a, b);
    if let Some(index) = a {
        stack.push(index);
    }
    println!("   Length after one push: {}", stack.len());
    println!("   Head: {:?}", stack.head.load());

    // Example 2: Concurrent pop/push churn
    println!("\n2. Concurrent Churn:");
    let capacity = 16;
    let stack = Arc::new(Stack::full(capacity));
    let num_threads = 8;
    let rounds = 50_000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let stack = stack.clone();
        let handle = thread::spawn(move || {
            let mut popped = 0;
            for _ in 0..rounds {
                if let Some(index) = stack.pop() {
                    stack.push(index);
                    popped += 1;
                }
            }
            println!("   Thread {} cycled {} nodes", i, popped);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final length: {} (expected: {}), tag: {}",
        stack.len(),
        capacity,
        stack.head.load().hi
    );

    println!("\n=== Example completed ===");
}

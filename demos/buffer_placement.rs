/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Buffer Placement Example
//!
//! Demonstrates carving aligned 128-bit cells out of a byte buffer.

use prism3_dwcas::{
    can_place_aligned,
    place_aligned_split,
    Uint128,
};

fn main() {
    println!("=== Buffer Placement Example ===\n");

    // Example 1: Feasibility
    println!("1. Feasibility Check:");
    for len in [30usize, 31, 64] {
        let buf = vec![0u8; len];
        println!("   len={:>2}, offset=0 -> {}", len, can_place_aligned(&buf, 0));
    }

    // Example 2: Packing several live cells
    println!("\n2. Packing Cells:");
    let mut buf = vec![0u8; 128];
    let base = buf.as_ptr() as usize;
    let mut cells = Vec::new();
    let mut rest: &mut [u8] = &mut buf[1..];
    while can_place_aligned(rest, 0) {
        let init = Uint128::new(cells.len() as u64, 0);
        let (cell, tail) = place_aligned_split(std::mem::take(&mut rest), 0, init);
        cells.push(&*cell);
        rest = tail;
    }
    let left = rest.len();
    for (index, cell) in cells.iter().enumerate() {
        let count = index as u64;
        let (_, swapped) = cell.release(Uint128::new(count, 0), Uint128::new(count, 1));
        assert!(swapped);
        println!(
            "   cell {} at buf+{} -> {:?}",
            index,
            cell.as_ptr() as usize - base,
            cell.load()
        );
    }
    println!("   Placed {} live cells, {} bytes left", cells.len(), left);

    println!("\n=== Example completed ===");
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_dwcas::{
    AlignedUint128,
    Uint128,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_new_is_aligned_and_initialised() {
    let cell = AlignedUint128::new(10, 20);
    assert_eq!(cell.as_ptr() as usize % 16, 0);
    assert_eq!(cell.load(), Uint128::new(10, 20));
}

#[test]
fn test_many_allocations_are_aligned() {
    // Keep all of them alive so the allocator hands out varied addresses.
    let cells: Vec<AlignedUint128> = (0..1024u64).map(|i| AlignedUint128::new(i, !i)).collect();
    for (i, cell) in cells.iter().enumerate() {
        let i = i as u64;
        assert_eq!(cell.as_ptr() as usize % 16, 0);
        assert_eq!(cell.load(), Uint128::new(i, !i));
    }
}

#[test]
fn test_default_is_zero() {
    let cell = AlignedUint128::default();
    assert_eq!(cell.load(), Uint128::ZERO);
}

#[test]
fn test_from_value() {
    let cell = AlignedUint128::from(Uint128::new(4, 5));
    assert_eq!(cell.load(), Uint128::new(4, 5));
}

#[test]
fn test_get_mut() {
    let mut cell = AlignedUint128::new(1, 1);
    cell.get_mut().hi = 7;
    assert_eq!(cell.load(), Uint128::new(1, 7));
}

#[test]
fn test_load_does_not_change_value() {
    let zero = AlignedUint128::new(0, 0);
    assert_eq!(zero.load(), Uint128::ZERO);
    assert_eq!(zero.load(), Uint128::ZERO);

    let cell = AlignedUint128::new(3, 0);
    assert_eq!(cell.load(), Uint128::new(3, 0));
    assert_eq!(cell.load(), Uint128::new(3, 0));
}

#[test]
fn test_debug_shows_value() {
    let cell = AlignedUint128::new(0xa, 0xb);
    let s = format!("{:?}", cell);
    assert!(s.contains("AlignedUint128"));
    assert!(s.contains("lo: 0xa"));
    assert!(s.contains("hi: 0xb"));
}

#[test]
fn test_debug_of_inner_value_leaves_it_unchanged() {
    let cell = AlignedUint128::new(0, 0x2a);
    let s = format!("{:?}", &*cell);
    assert!(s.starts_with("AtomicUint128"));
    assert!(s.contains("hi: 0x2a"));
    assert_eq!(cell.load(), Uint128::new(0, 0x2a));
}

#[test]
fn test_send_to_another_thread() {
    let cell = AlignedUint128::new(1, 2);
    let handle = thread::spawn(move || {
        assert!(cell.release(Uint128::new(1, 2), Uint128::new(2, 3)).1);
        cell
    });
    let cell = handle.join().unwrap();
    assert_eq!(cell.load(), Uint128::new(2, 3));
}

#[test]
fn test_shared_through_arc() {
    let cell = Arc::new(AlignedUint128::new(0, 0));
    let other = cell.clone();
    thread::spawn(move || {
        assert!(other.acq_rel(Uint128::ZERO, Uint128::new(9, 9)).1);
    })
    .join()
    .unwrap();
    assert_eq!(cell.load(), Uint128::new(9, 9));
}

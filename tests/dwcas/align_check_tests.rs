/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_dwcas::config::ALIGNMENT_CHECKS;
use prism3_dwcas::{
    AtomicUint128,
    Uint128,
};
use std::ptr;

/// A 16-byte aligned scratch area large enough to carve misaligned views.
#[repr(C, align(16))]
struct Scratch([u64; 8]);

#[test]
fn test_checks_are_enabled() {
    assert!(ALIGNMENT_CHECKS);
}

#[test]
#[should_panic(expected = "target is null")]
fn test_from_ptr_faults_on_null() {
    // SAFETY: the guard faults before the pointer is used.
    let _ = unsafe { AtomicUint128::from_ptr(ptr::null_mut()) };
}

#[test]
#[should_panic(expected = "is not 16-byte aligned")]
fn test_from_ptr_faults_on_8_mod_16() {
    let mut scratch = Scratch([0; 8]);
    let misaligned = scratch.0[1..].as_mut_ptr().cast::<Uint128>();
    // SAFETY: the guard faults before the pointer is used.
    let _ = unsafe { AtomicUint128::from_ptr(misaligned) };
}

#[test]
fn test_from_ptr_accepts_aligned_pointer() {
    let mut scratch = Scratch([0; 8]);
    let aligned = scratch.0[2..].as_mut_ptr().cast::<Uint128>();
    // SAFETY: 16-byte aligned, valid, and only used from this thread.
    let cell = unsafe { AtomicUint128::from_ptr(aligned) };
    assert!(cell.acq_rel(Uint128::ZERO, Uint128::new(1, 1)).1);
    assert_eq!(scratch.0[2..4], [1, 1]);
}

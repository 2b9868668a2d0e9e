/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # x86_64 Kernel
//!
//! `lock cmpxchg16b` is a full barrier on both outcomes, so the ordering
//! variants differ only in where a compiler fence is placed. The barriers
//! are compiler fences as well: x86_64 is TSO and no `mfence` is emitted.
//!
//! # Author
//!
//! Haixing Hu

use std::arch::asm;
use std::sync::atomic::{
    compiler_fence,
    Ordering,
};

use super::Cas128;
use crate::dwcas::uint128::Uint128;

/// The `cmpxchg16b` backend.
pub(crate) struct Cmpxchg16b;

/// Executes one `lock cmpxchg16b` on `dst`.
///
/// # Safety
///
/// See [`Cas128`].
#[inline(always)]
unsafe fn cmpxchg16b(dst: *mut Uint128, expected: Uint128, desired: Uint128) -> (Uint128, bool) {
    let prev_lo: u64;
    let prev_hi: u64;
    let flag: u64;
    // SAFETY: the caller guarantees `dst` is valid and 16-byte aligned.
    // rbx is reserved by LLVM, so it is swapped in and restored by hand.
    unsafe {
        asm!(
            "xchg {rbx_tmp}, rbx",
            "lock cmpxchg16b xmmword ptr [{dst}]",
            "sete cl",
            "mov rbx, {rbx_tmp}",
            dst = in(reg) dst,
            rbx_tmp = inout(reg) desired.lo => _,
            inout("rcx") desired.hi => flag,
            inout("rax") expected.lo => prev_lo,
            inout("rdx") expected.hi => prev_hi,
            options(nostack),
        );
    }
    (Uint128::new(prev_lo, prev_hi), flag as u8 != 0)
}

impl Cas128 for Cmpxchg16b {
    #[inline]
    unsafe fn cas_relaxed(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { cmpxchg16b(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acquire(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        let result = unsafe { cmpxchg16b(dst, expected, desired) };
        compiler_fence(Ordering::Acquire);
        result
    }

    #[inline]
    unsafe fn cas_release(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        compiler_fence(Ordering::Release);
        // SAFETY: forwarded from the caller.
        unsafe { cmpxchg16b(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acq_rel(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        compiler_fence(Ordering::Release);
        // SAFETY: forwarded from the caller.
        let result = unsafe { cmpxchg16b(dst, expected, desired) };
        compiler_fence(Ordering::Acquire);
        result
    }

    #[inline]
    fn barrier_acquire() {
        compiler_fence(Ordering::Acquire);
    }

    #[inline]
    fn barrier_release() {
        compiler_fence(Ordering::Release);
    }

    #[inline]
    fn barrier_full() {
        compiler_fence(Ordering::SeqCst);
    }
}

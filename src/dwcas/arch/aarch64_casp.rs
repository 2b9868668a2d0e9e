/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # aarch64 LSE Pair-CAS Kernel
//!
//! Uses the `casp` family, one encoding per ordering. The release-style
//! variants issue `dmb ish` before the instruction: `caspl` only releases
//! when the store happens, while the barrier also orders a failed attempt
//! after the caller's prior writes.
//!
//! Requires the `lse` target feature and a little-endian target.
//!
//! # Author
//!
//! Haixing Hu

use std::arch::asm;

use super::aarch64_fence::{
    dmb_ish,
    dmb_ishld,
    dmb_ishst,
};
use super::Cas128;
use crate::dwcas::uint128::Uint128;

/// The LSE `casp` backend.
pub(crate) struct Casp;

/// Defines one pair-CAS kernel.
///
/// `casp` needs even/odd register pairs, so the operands are pinned to
/// x4/x5 (desired) and x6/x7 (expected, then observed).
macro_rules! casp_kernel {
    ($name:ident, $fence:literal, $insn:literal) => {
        #[inline(always)]
        unsafe fn $name(
            dst: *mut Uint128,
            expected: Uint128,
            desired: Uint128,
        ) -> (Uint128, bool) {
            let prev_lo: u64;
            let prev_hi: u64;
            // SAFETY: the caller guarantees `dst` is valid and 16-byte
            // aligned.
            unsafe {
                asm!(
                    $fence,
                    concat!($insn, " x6, x7, x4, x5, [{dst}]"),
                    dst = in(reg) dst,
                    inout("x6") expected.lo => prev_lo,
                    inout("x7") expected.hi => prev_hi,
                    in("x4") desired.lo,
                    in("x5") desired.hi,
                    options(nostack, preserves_flags),
                );
            }
            let prev = Uint128::new(prev_lo, prev_hi);
            (prev, prev == expected)
        }
    };
}

casp_kernel!(casp, "", "casp");
casp_kernel!(caspa, "", "caspa");
casp_kernel!(caspl, "dmb ish", "caspl");
casp_kernel!(caspal, "dmb ish", "caspal");

impl Cas128 for Casp {
    #[inline]
    unsafe fn cas_relaxed(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { casp(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acquire(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { caspa(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_release(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { caspl(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acq_rel(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { caspal(dst, expected, desired) }
    }

    #[inline]
    fn barrier_acquire() {
        dmb_ishld();
    }

    #[inline]
    fn barrier_release() {
        dmb_ishst();
    }

    #[inline]
    fn barrier_full() {
        dmb_ish();
    }
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # aarch64 LL/SC Kernel
//!
//! A load-exclusive pair / store-exclusive pair loop. Orderings select the
//! instruction encodings:
//!
//! | Variant   | barrier before | load     | store    |
//! |-----------|----------------|----------|----------|
//! | Relaxed   | -              | `ldxp`   | `stxp`   |
//! | Acquire   | -              | `ldaxp`  | `stxp`   |
//! | Release   | `dmb ish`      | `ldxp`   | `stlxp`  |
//! | AcqRel    | `dmb ish`      | `ldaxp`  | `stlxp`  |
//!
//! A release store-exclusive must be preceded by the barrier so that a
//! failed attempt is still ordered after prior writes.
//!
//! `ldxp` alone is not single-copy atomic for 128 bits. On a mismatch the
//! observed pair is written back with a store-exclusive; only when that
//! store succeeds is the observed value reported, so it is never torn.
//! A lost reservation restarts the loop.
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

/// The LDXP/STXP backend.
pub(crate) struct Llsc;

/// Defines one LL/SC kernel.
macro_rules! llsc_kernel {
    ($name:ident, $fence:literal, $load:literal, $store:literal) => {
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
                    "2:",
                    concat!($load, " {prev_lo}, {prev_hi}, [{dst}]"),
                    "cmp {prev_lo}, {exp_lo}",
                    "ccmp {prev_hi}, {exp_hi}, #0, eq",
                    "b.ne 3f",
                    concat!($store, " {status:w}, {new_lo}, {new_hi}, [{dst}]"),
                    "cbnz {status:w}, 2b",
                    "b 4f",
                    "3:",
                    concat!($store, " {status:w}, {prev_lo}, {prev_hi}, [{dst}]"),
                    "cbnz {status:w}, 2b",
                    "4:",
                    dst = in(reg) dst,
                    exp_lo = in(reg) expected.lo,
                    exp_hi = in(reg) expected.hi,
                    new_lo = in(reg) desired.lo,
                    new_hi = in(reg) desired.hi,
                    prev_lo = out(reg) prev_lo,
                    prev_hi = out(reg) prev_hi,
                    status = out(reg) _,
                    options(nostack),
                );
            }
            let prev = Uint128::new(prev_lo, prev_hi);
            (prev, prev == expected)
        }
    };
}

llsc_kernel!(llsc_relaxed, "", "ldxp", "stxp");
llsc_kernel!(llsc_acquire, "", "ldaxp", "stxp");
llsc_kernel!(llsc_release, "dmb ish", "ldxp", "stlxp");
llsc_kernel!(llsc_acq_rel, "dmb ish", "ldaxp", "stlxp");

impl Cas128 for Llsc {
    #[inline]
    unsafe fn cas_relaxed(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { llsc_relaxed(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acquire(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { llsc_acquire(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_release(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { llsc_release(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acq_rel(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        // SAFETY: forwarded from the caller.
        unsafe { llsc_acq_rel(dst, expected, desired) }
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

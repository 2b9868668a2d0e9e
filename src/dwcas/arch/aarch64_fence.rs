/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # aarch64 Barriers
//!
//! Inner-shareable data memory barriers shared by both aarch64 kernels.
//!
//! # Author
//!
//! Haixing Hu

use std::arch::asm;

/// `dmb ishld`: orders prior loads before later loads and stores.
#[inline]
pub(super) fn dmb_ishld() {
    // SAFETY: a barrier has no memory operands.
    unsafe { asm!("dmb ishld", options(nostack, preserves_flags)) };
}

/// `dmb ishst`: orders prior stores before later stores.
#[inline]
pub(super) fn dmb_ishst() {
    // SAFETY: a barrier has no memory operands.
    unsafe { asm!("dmb ishst", options(nostack, preserves_flags)) };
}

/// `dmb ish`: full barrier.
#[inline]
pub(super) fn dmb_ish() {
    // SAFETY: a barrier has no memory operands.
    unsafe { asm!("dmb ish", options(nostack, preserves_flags)) };
}

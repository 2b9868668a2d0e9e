/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Diagnostic Alignment Guard
//!
//! With the `align-checks` feature, [`Kernel`] is the selected backend
//! wrapped in [`Checked`], which verifies that the target is non-null and
//! 16-byte aligned before every CAS. Without the feature, [`Kernel`] is the
//! bare backend and no check exists in the binary.
//!
//! # Author
//!
//! Haixing Hu

#[cfg(any(test, feature = "align-checks"))]
use std::marker::PhantomData;

#[cfg(any(test, feature = "align-checks"))]
use crate::dwcas::arch::Cas128;
#[cfg(any(test, feature = "align-checks"))]
use crate::dwcas::config::ALIGNMENT;
#[cfg(any(test, feature = "align-checks"))]
use crate::dwcas::error::{
    fault,
    Fault,
};
#[cfg(any(test, feature = "align-checks"))]
use crate::dwcas::uint128::Uint128;

#[cfg(not(feature = "align-checks"))]
pub(crate) type Kernel = crate::dwcas::arch::Selected;

#[cfg(feature = "align-checks")]
pub(crate) type Kernel = Checked<crate::dwcas::arch::Selected>;

/// Faults unless `ptr` is non-null and 16-byte aligned.
#[cfg(any(test, feature = "align-checks"))]
#[inline]
#[track_caller]
pub(crate) fn check_aligned(ptr: *const Uint128) {
    if ptr.is_null() {
        fault(Fault::NullTarget);
    }
    let addr = ptr as usize;
    if addr % ALIGNMENT != 0 {
        fault(Fault::MisalignedTarget { addr });
    }
}

/// Validation decorator around a backend.
#[cfg(any(test, feature = "align-checks"))]
pub(crate) struct Checked<B>(PhantomData<B>);

#[cfg(any(test, feature = "align-checks"))]
impl<B: Cas128> Cas128 for Checked<B> {
    #[inline]
    unsafe fn cas_relaxed(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        check_aligned(dst);
        // SAFETY: forwarded from the caller; alignment was just verified.
        unsafe { B::cas_relaxed(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acquire(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        check_aligned(dst);
        // SAFETY: forwarded from the caller; alignment was just verified.
        unsafe { B::cas_acquire(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_release(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        check_aligned(dst);
        // SAFETY: forwarded from the caller; alignment was just verified.
        unsafe { B::cas_release(dst, expected, desired) }
    }

    #[inline]
    unsafe fn cas_acq_rel(
        dst: *mut Uint128,
        expected: Uint128,
        desired: Uint128,
    ) -> (Uint128, bool) {
        check_aligned(dst);
        // SAFETY: forwarded from the caller; alignment was just verified.
        unsafe { B::cas_acq_rel(dst, expected, desired) }
    }

    #[inline]
    fn barrier_acquire() {
        B::barrier_acquire();
    }

    #[inline]
    fn barrier_release() {
        B::barrier_release();
    }

    #[inline]
    fn barrier_full() {
        B::barrier_full();
    }
}

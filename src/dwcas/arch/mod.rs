/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Architecture Backends
//!
//! One kernel per instruction set, chosen at compile time and exposed as
//! [`Selected`]. Every kernel implements the same [`Cas128`] contract.
//!
//! # Author
//!
//! Haixing Hu

use crate::dwcas::uint128::Uint128;

#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "aarch64")]
mod aarch64_fence;

#[cfg(all(
    target_arch = "aarch64",
    target_feature = "lse",
    target_endian = "little",
    not(feature = "llsc")
))]
mod aarch64_casp;

#[cfg(all(
    target_arch = "aarch64",
    not(all(
        target_feature = "lse",
        target_endian = "little",
        not(feature = "llsc")
    ))
))]
mod aarch64_llsc;

#[cfg(any(test, not(any(target_arch = "x86_64", target_arch = "aarch64"))))]
pub(crate) mod unsupported;

#[cfg(target_arch = "x86_64")]
pub(crate) type Selected = x86_64::Cmpxchg16b;

#[cfg(all(
    target_arch = "aarch64",
    target_feature = "lse",
    target_endian = "little",
    not(feature = "llsc")
))]
pub(crate) type Selected = aarch64_casp::Casp;

#[cfg(all(
    target_arch = "aarch64",
    not(all(
        target_feature = "lse",
        target_endian = "little",
        not(feature = "llsc")
    ))
))]
pub(crate) type Selected = aarch64_llsc::Llsc;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) type Selected = unsupported::Unsupported;

/// A 128-bit compare-and-swap kernel plus its memory barriers.
///
/// Each CAS function reads the 16 bytes at `dst`, compares them with
/// `expected` and, only if both words are equal, writes `desired`, all as
/// one indivisible step. It returns the value observed at the time of the
/// attempt and whether the swap happened.
///
/// # Safety
///
/// For every CAS function, `dst` must be non-null, 16-byte aligned, valid
/// for reads and writes of 16 bytes, and must not be accessed
/// non-atomically by another thread during the call.
pub(crate) trait Cas128 {
    /// Relaxed on success and failure.
    unsafe fn cas_relaxed(dst: *mut Uint128, expected: Uint128, desired: Uint128)
        -> (Uint128, bool);

    /// Acquire on success, relaxed on failure.
    unsafe fn cas_acquire(dst: *mut Uint128, expected: Uint128, desired: Uint128)
        -> (Uint128, bool);

    /// Release on success, relaxed on failure.
    unsafe fn cas_release(dst: *mut Uint128, expected: Uint128, desired: Uint128)
        -> (Uint128, bool);

    /// Acquire-release on success, relaxed on failure.
    unsafe fn cas_acq_rel(dst: *mut Uint128, expected: Uint128, desired: Uint128)
        -> (Uint128, bool);

    /// Acquire barrier.
    fn barrier_acquire();

    /// Release barrier.
    fn barrier_release();

    /// Full barrier.
    fn barrier_full();
}

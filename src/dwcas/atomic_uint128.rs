/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 128-bit Location
//!
//! The ordering façade: four compare-and-swap variants over the backend
//! selected at compile time.
//!
//! # Author
//!
//! Haixing Hu

use std::cell::UnsafeCell;
use std::fmt;

use crate::dwcas::arch::Cas128;
use crate::dwcas::config::Backend;
use crate::dwcas::guard::Kernel;
use crate::dwcas::uint128::Uint128;

/// A 16-byte location updated by 128-bit compare-and-swap.
///
/// Has the same layout as [`Uint128`]. The address of every
/// `AtomicUint128` used with the CAS methods **must** be 16-byte aligned.
/// This type has no public by-value constructor; references come from:
///
/// - [`AlignedUint128::new`](crate::AlignedUint128::new): heap allocation
///   with guaranteed alignment.
/// - [`place_aligned`](crate::place_aligned): placement inside a caller's
///   byte buffer.
/// - [`AtomicUint128::from_ptr`]: the caller vouches for alignment.
///
/// # Memory Ordering
///
/// | Method     | Success ordering | Failure ordering |
/// |------------|------------------|------------------|
/// | `relaxed`  | relaxed          | relaxed          |
/// | `acquire`  | acquire          | relaxed          |
/// | `release`  | release          | relaxed          |
/// | `acq_rel`  | acquire+release  | relaxed          |
///
/// The hardware may provide stronger ordering than requested; do not rely
/// on anything weaker than documented. On x86_64 every variant is a full
/// barrier. On aarch64 `release` and `acq_rel` issue `dmb ish` before the
/// attempt, which also orders a failed attempt.
///
/// # Return Values
///
/// Every variant returns `(prev, swapped)`: `prev` is the value observed in
/// memory at the time of the attempt, whether or not it succeeded, and
/// `swapped` is `true` iff `prev == expected` and `desired` was written by
/// the same atomic step. A retry loop can feed `prev` back as the next
/// `expected` without a separate load.
///
/// # Example
///
/// ```rust
/// use prism3_dwcas::{AlignedUint128, Uint128};
///
/// // (pointer, version) pair updated together
/// let head = AlignedUint128::new(0x1000, 0);
/// let mut current = head.load();
/// loop {
///     let next = Uint128::new(0x2000, current.hi + 1);
///     let (prev, swapped) = head.acq_rel(current, next);
///     if swapped {
///         break;
///     }
///     current = prev;
/// }
/// assert_eq!(head.load(), Uint128::new(0x2000, 1));
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicUint128 {
    inner: UnsafeCell<Uint128>,
}

// SAFETY: all shared access to `inner` goes through the atomic backend.
unsafe impl Sync for AtomicUint128 {}

impl AtomicUint128 {
    /// Reinterprets a raw pointer as a shared atomic location.
    ///
    /// With the `align-checks` feature, faults if `ptr` is null or not
    /// 16-byte aligned.
    ///
    /// # Safety
    ///
    /// - `ptr` must be non-null and 16-byte aligned.
    /// - `ptr` must be valid for reads and writes of 16 bytes for `'a`.
    /// - For `'a`, the location must only be accessed through atomic
    ///   operations of this crate while it is shared between threads.
    #[inline]
    #[track_caller]
    pub unsafe fn from_ptr<'a>(ptr: *mut Uint128) -> &'a Self {
        #[cfg(feature = "align-checks")]
        crate::dwcas::guard::check_aligned(ptr);
        // SAFETY: `AtomicUint128` is `repr(transparent)` over
        // `UnsafeCell<Uint128>`, and the caller guarantees validity.
        unsafe { &*ptr.cast::<Self>() }
    }

    /// Returns a raw pointer to the underlying value.
    #[inline]
    pub const fn as_ptr(&self) -> *mut Uint128 {
        self.inner.get()
    }

    /// Returns a mutable reference to the underlying value.
    ///
    /// Exclusive access makes a plain read or write safe, e.g. to initialise
    /// a freshly placed value before sharing it.
    #[inline]
    pub fn get_mut(&mut self) -> &mut Uint128 {
        self.inner.get_mut()
    }

    /// 128-bit CAS with relaxed ordering on success and failure.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the location must hold for the swap.
    /// * `desired` - The value written on success.
    ///
    /// # Returns
    ///
    /// `(prev, swapped)` as described on the type.
    #[inline]
    pub fn relaxed(&self, expected: Uint128, desired: Uint128) -> (Uint128, bool) {
        // SAFETY: every safe way to obtain `&self` yields a 16-byte aligned,
        // valid location; `from_ptr` callers promise the same.
        unsafe { Kernel::cas_relaxed(self.as_ptr(), expected, desired) }
    }

    /// 128-bit CAS with acquire ordering on success and relaxed ordering on
    /// failure.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the location must hold for the swap.
    /// * `desired` - The value written on success.
    ///
    /// # Returns
    ///
    /// `(prev, swapped)` as described on the type.
    #[inline]
    pub fn acquire(&self, expected: Uint128, desired: Uint128) -> (Uint128, bool) {
        // SAFETY: see `relaxed`.
        unsafe { Kernel::cas_acquire(self.as_ptr(), expected, desired) }
    }

    /// 128-bit CAS with release ordering on success and relaxed ordering on
    /// failure.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the location must hold for the swap.
    /// * `desired` - The value written on success.
    ///
    /// # Returns
    ///
    /// `(prev, swapped)` as described on the type.
    #[inline]
    pub fn release(&self, expected: Uint128, desired: Uint128) -> (Uint128, bool) {
        // SAFETY: see `relaxed`.
        unsafe { Kernel::cas_release(self.as_ptr(), expected, desired) }
    }

    /// 128-bit CAS with acquire-release ordering on success and relaxed
    /// ordering on failure.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the location must hold for the swap.
    /// * `desired` - The value written on success.
    ///
    /// # Returns
    ///
    /// `(prev, swapped)` as described on the type.
    #[inline]
    pub fn acq_rel(&self, expected: Uint128, desired: Uint128) -> (Uint128, bool) {
        // SAFETY: see `relaxed`.
        unsafe { Kernel::cas_acq_rel(self.as_ptr(), expected, desired) }
    }

    /// Atomically reads the 16 bytes with acquire ordering.
    ///
    /// Implemented as `acquire(ZERO, ZERO)`: the observed value is returned
    /// and the location is left unchanged, since a successful swap writes
    /// back the same zero value. The location must therefore be writable.
    #[inline]
    pub fn load(&self) -> Uint128 {
        self.acquire(Uint128::ZERO, Uint128::ZERO).0
    }
}

/// Formats the current value through [`AtomicUint128::load`], or prints
/// `<unsupported>` when the build has no backend, so `{:?}` never faults.
pub(crate) struct DebugValue<'a>(pub(crate) &'a AtomicUint128);

impl fmt::Debug for DebugValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Backend::current().is_supported() {
            fmt::Debug::fmt(&self.0.load(), f)
        } else {
            f.write_str("<unsupported>")
        }
    }
}

/// The value is read with [`load`](AtomicUint128::load), which is a CAS
/// and therefore needs writable memory like every other operation.
impl fmt::Debug for AtomicUint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicUint128")
            .field("value", &DebugValue(self))
            .finish()
    }
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Aligned Heap Allocation
//!
//! An owned, heap-allocated [`AtomicUint128`] whose address is always a
//! multiple of 16.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;

use crate::dwcas::atomic_uint128::{
    AtomicUint128,
    DebugValue,
};
use crate::dwcas::config::ALIGNMENT;
use crate::dwcas::uint128::Uint128;

/// Number of words allocated: the 2-word value plus one word of slack.
const SLOT_WORDS: usize = 3;

/// A heap-allocated, 16-byte aligned [`AtomicUint128`].
///
/// The allocation holds three 64-bit words. A `[u64; 3]` is always 8-byte
/// aligned, so the only possible misalignment is 8 bytes; skipping one word
/// in that case always leaves a 16-byte aligned two-word window.
///
/// Dereferences to [`AtomicUint128`]. Alignment holds for this handle's
/// location only: copying the value elsewhere requires re-establishing it.
///
/// # Example
///
/// ```rust
/// use prism3_dwcas::{AlignedUint128, Uint128};
/// use std::sync::Arc;
/// use std::thread;
///
/// let cell = Arc::new(AlignedUint128::new(0, 0));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let cell = cell.clone();
///         thread::spawn(move || {
///             let mut current = cell.load();
///             loop {
///                 let next = Uint128::new(current.lo + 1, current.hi + 1);
///                 match cell.acq_rel(current, next) {
///                     (_, true) => break,
///                     (prev, false) => current = prev,
///                 }
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(cell.load(), Uint128::new(4, 4));
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AlignedUint128 {
    base: NonNull<[u64; SLOT_WORDS]>,
    slot: NonNull<AtomicUint128>,
}

// SAFETY: the handle owns its allocation, and `AtomicUint128` is `Sync`.
unsafe impl Send for AlignedUint128 {}
// SAFETY: shared access only hands out `&AtomicUint128`.
unsafe impl Sync for AlignedUint128 {}

impl AlignedUint128 {
    /// Allocates a 16-byte aligned value initialised with `lo` and `hi`.
    ///
    /// # Parameters
    ///
    /// * `lo` - The initial low word.
    /// * `hi` - The initial high word.
    pub fn new(lo: u64, hi: u64) -> Self {
        let base = NonNull::from(Box::leak(Box::new([0u64; SLOT_WORDS])));
        let words = base.as_ptr().cast::<u64>();
        let addr = words as usize;
        debug_assert_eq!(addr % 8, 0);

        let pad = (ALIGNMENT - (addr & (ALIGNMENT - 1))) & (ALIGNMENT - 1);
        let offset = pad >> 3;
        tracing::trace!(addr, pad, "allocated aligned Uint128 storage");

        // SAFETY: `offset` is 0 or 1, so words `offset..offset + 2` lie
        // inside the 3-word allocation, and the result is 16-byte aligned.
        let slot = unsafe {
            let window = words.add(offset).cast::<Uint128>();
            window.write(Uint128::new(lo, hi));
            NonNull::new_unchecked(window.cast::<AtomicUint128>())
        };
        Self { base, slot }
    }

    /// Returns a mutable reference to the stored value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut Uint128 {
        // SAFETY: `&mut self` gives exclusive access to the slot.
        unsafe { self.slot.as_mut() }.get_mut()
    }
}

impl Deref for AlignedUint128 {
    type Target = AtomicUint128;

    #[inline]
    fn deref(&self) -> &AtomicUint128 {
        // SAFETY: `slot` points into the live allocation owned by `self`.
        unsafe { self.slot.as_ref() }
    }
}

impl Default for AlignedUint128 {
    /// Allocates a zero-initialised value.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl From<Uint128> for AlignedUint128 {
    fn from(value: Uint128) -> Self {
        Self::new(value.lo, value.hi)
    }
}

impl Drop for AlignedUint128 {
    fn drop(&mut self) {
        // SAFETY: `base` came from `Box::leak` in `new` and is freed once.
        drop(unsafe { Box::from_raw(self.base.as_ptr()) });
    }
}

impl fmt::Debug for AlignedUint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedUint128")
            .field("addr", &self.slot.as_ptr())
            .field("value", &DebugValue(self))
            .finish()
    }
}
